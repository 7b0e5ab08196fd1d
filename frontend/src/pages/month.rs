use chrono::NaiveDate;
use shared::{displayed_total, total_pages, MonthQuery, StoredItem};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::items_table::ItemsTable;
use crate::components::pagination::Pagination;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::items::ItemService;

#[derive(Properties, PartialEq)]
pub struct MonthPageProps {
    pub api: ApiClient,
}

/// Server-paginated month view. Picking a specific date switches to the
/// by-date endpoint: pagination disappears and the displayed total becomes
/// the local sum of the returned items rather than the month's server total.
#[function_component(MonthPage)]
pub fn month_page(props: &MonthPageProps) -> Html {
    let items = use_state(Vec::<StoredItem>::new);
    let total_items = use_state(|| 0u64);
    let total_price = use_state(|| 0.0f64);
    let loading = use_state(|| true);

    let page = use_state(|| 1u32);
    let limit = use_state(|| 20u32);
    let search = use_state(String::new);
    let pending_search = use_state(String::new);
    let selected_date = use_state(|| Option::<NaiveDate>::None);

    // Each fetch takes a ticket; a completion that no longer holds the latest
    // ticket is stale and must not overwrite newer state.
    let request_seq = use_mut_ref(|| 0u64);

    {
        let service = ItemService::new(props.api.clone());
        let items = items.clone();
        let total_items = total_items.clone();
        let total_price = total_price.clone();
        let loading = loading.clone();
        let request_seq = request_seq.clone();
        use_effect_with(
            (*page, *limit, (*search).clone(), *selected_date),
            move |deps| {
                let (page, limit, search, selected_date) = deps.clone();
                let ticket = {
                    let mut seq = request_seq.borrow_mut();
                    *seq += 1;
                    *seq
                };
                spawn_local(async move {
                    loading.set(true);
                    let result = if let Some(date) = selected_date {
                        service.get_by_date(date).await.map(|res| {
                            let count = res.data.len() as u64;
                            (res.data, count, res.total)
                        })
                    } else {
                        let query = MonthQuery {
                            page,
                            limit,
                            search,
                            date: None,
                        };
                        service
                            .get_this_month(&query)
                            .await
                            .map(|res| (res.data, res.total_items, res.total_price))
                    };
                    if *request_seq.borrow() != ticket {
                        // A newer fetch started while this one was in flight.
                        return;
                    }
                    match result {
                        Ok((data, count, price)) => {
                            items.set(data);
                            total_items.set(count);
                            total_price.set(price);
                        }
                        Err(message) => {
                            gloo::console::error!("Failed to load this month's items:", message);
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
        );
    }

    let filter_active = selected_date.is_some() || !search.trim().is_empty();
    let shown_total = displayed_total(*total_price, &items, filter_active);
    let pages = total_pages(*total_items, *limit);
    let total_label = if let Some(date) = *selected_date {
        format!("Total for {}", date_utils::iso_date(date))
    } else if !search.trim().is_empty() {
        "Total for Search".to_string()
    } else {
        "Total for the Month".to_string()
    };

    let on_pending_search = {
        let pending_search = pending_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pending_search.set(input.value());
        })
    };
    // Search commits on the button, not per keystroke, and clears any date.
    let on_commit_search = {
        let page = page.clone();
        let search = search.clone();
        let pending_search = pending_search.clone();
        let selected_date = selected_date.clone();
        Callback::from(move |_: MouseEvent| {
            page.set(1);
            selected_date.set(None);
            search.set((*pending_search).clone());
        })
    };
    let on_date = {
        let page = page.clone();
        let selected_date = selected_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            page.set(1);
            selected_date.set(NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok());
        })
    };
    let on_limit = {
        let page = page.clone();
        let limit = limit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            page.set(1);
            limit.set(select.value().parse().unwrap_or(20));
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |number: u32| page.set(number))
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"This Month's Items"}</h1>
                <p class="subtitle">{"Track all your expenses for this month"}</p>
            </div>

            <div class="filters">
                <div class="search-group">
                    <input
                        type="text"
                        placeholder="Search item..."
                        value={(*pending_search).clone()}
                        oninput={on_pending_search}
                    />
                    <button class="btn primary" onclick={on_commit_search}>{"Search"}</button>
                </div>
                <input
                    type="date"
                    value={selected_date.map(date_utils::iso_date).unwrap_or_default()}
                    max={date_utils::iso_date(date_utils::today())}
                    onchange={on_date}
                />
                <select onchange={on_limit}>
                    <option value="20" selected={*limit == 20}>{"20 items"}</option>
                    <option value="50" selected={*limit == 50}>{"50 items"}</option>
                    <option value="100" selected={*limit == 100}>{"100 items"}</option>
                </select>
            </div>

            {if *loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else if items.is_empty() {
                html! { <div class="empty">{"No items found."}</div> }
            } else {
                html! {
                    <>
                        <div class="card total-card">
                            <p class="total-label">{total_label}</p>
                            <p class="amount">{format!("₹{}", shown_total)}</p>
                        </div>
                        <ItemsTable items={(*items).clone()} show_date=true />
                        {if selected_date.is_none() {
                            html! {
                                <Pagination
                                    page={*page}
                                    total_pages={pages}
                                    total_items={*total_items}
                                    on_page={on_page}
                                />
                            }
                        } else {
                            html! {}
                        }}
                    </>
                }
            }}
        </div>
    }
}
