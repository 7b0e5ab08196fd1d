use chrono::Datelike;
use shared::{total_pages, OverallQuery, StoredItem};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::items_table::ItemsTable;
use crate::components::pagination::Pagination;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::items::ItemService;

#[derive(Properties, PartialEq)]
pub struct OverallPageProps {
    pub api: ApiClient,
}

/// Full-history view. Month/year narrowing happens on the server, so the
/// total card always shows the server's figure for the current filter.
#[function_component(OverallPage)]
pub fn overall_page(props: &OverallPageProps) -> Html {
    let items = use_state(Vec::<StoredItem>::new);
    let total_items = use_state(|| 0u64);
    let total_price = use_state(|| 0.0f64);
    let loading = use_state(|| true);

    let page = use_state(|| 1u32);
    let limit = use_state(|| 20u32);
    let search = use_state(String::new);
    let pending_search = use_state(String::new);
    let month = use_state(|| Option::<u32>::None);
    let year = use_state(|| Option::<i32>::None);

    let request_seq = use_mut_ref(|| 0u64);

    {
        let service = ItemService::new(props.api.clone());
        let items = items.clone();
        let total_items = total_items.clone();
        let total_price = total_price.clone();
        let loading = loading.clone();
        let request_seq = request_seq.clone();
        use_effect_with(
            (*page, *limit, (*search).clone(), *month, *year),
            move |deps| {
                let (page, limit, search, month, year) = deps.clone();
                let ticket = {
                    let mut seq = request_seq.borrow_mut();
                    *seq += 1;
                    *seq
                };
                spawn_local(async move {
                    loading.set(true);
                    let query = OverallQuery {
                        page,
                        limit,
                        search,
                        month,
                        year,
                    };
                    let result = service.get_overall(&query).await;
                    if *request_seq.borrow() != ticket {
                        return;
                    }
                    match result {
                        Ok(res) => {
                            items.set(res.data);
                            total_items.set(res.total_items);
                            total_price.set(res.total_price);
                        }
                        Err(message) => {
                            gloo::console::error!("Failed to load overall items:", message);
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
        );
    }

    let current_year = date_utils::today().year();
    let pages = total_pages(*total_items, *limit);
    let total_label = match (*month, *year) {
        (Some(m), Some(y)) => format!("Total for {} {}", date_utils::month_name(m), y),
        (None, Some(y)) => format!("Total for {}", y),
        _ if !search.trim().is_empty() => "Total for Search".to_string(),
        _ => "Overall Total".to_string(),
    };

    let on_pending_search = {
        let pending_search = pending_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pending_search.set(input.value());
        })
    };
    let on_commit_search = {
        let page = page.clone();
        let search = search.clone();
        let pending_search = pending_search.clone();
        Callback::from(move |_: MouseEvent| {
            page.set(1);
            search.set((*pending_search).clone());
        })
    };
    // A month on its own is ambiguous, so picking one fills in the current
    // year when no year is chosen yet.
    let on_month = {
        let page = page.clone();
        let month = month.clone();
        let year = year.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            page.set(1);
            match select.value().parse::<u32>() {
                Ok(m) => {
                    month.set(Some(m));
                    if year.is_none() {
                        year.set(Some(current_year));
                    }
                }
                Err(_) => month.set(None),
            }
        })
    };
    let on_year = {
        let page = page.clone();
        let year = year.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            page.set(1);
            year.set(select.value().parse::<i32>().ok());
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
                <h1>{"Overall Items"}</h1>
                <p class="subtitle">{"Your complete spending history"}</p>
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
                <select onchange={on_month}>
                    <option value="all" selected={month.is_none()}>{"All months"}</option>
                    {for (1..=12u32).map(|m| html! {
                        <option value={m.to_string()} selected={*month == Some(m)}>
                            {date_utils::month_name(m)}
                        </option>
                    })}
                </select>
                <select onchange={on_year}>
                    <option value="all" selected={year.is_none()}>{"All years"}</option>
                    {for (current_year - 4..=current_year).rev().map(|y| html! {
                        <option value={y.to_string()} selected={*year == Some(y)}>
                            {y.to_string()}
                        </option>
                    })}
                </select>
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
                            <p class="amount">{format!("₹{}", *total_price)}</p>
                        </div>
                        <ItemsTable items={(*items).clone()} show_date=true />
                        <Pagination
                            page={*page}
                            total_pages={pages}
                            total_items={*total_items}
                            on_page={on_page}
                        />
                    </>
                }
            }}
        </div>
    }
}
