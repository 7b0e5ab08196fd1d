use chrono::NaiveDate;
use shared::{displayed_total, filter_items, group_by_day, week_dates, StoredItem, WeekFilter};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::items_table::ItemsTable;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::items::ItemService;

#[derive(Properties, PartialEq)]
pub struct WeekPageProps {
    pub api: ApiClient,
}

/// The week view fetches the whole week once, unpaginated, then filters and
/// groups client-side. This is deliberately a different code path from the
/// server-side filtering of the Month and Overall views.
#[function_component(WeekPage)]
pub fn week_page(props: &WeekPageProps) -> Html {
    let items = use_state(Vec::<StoredItem>::new);
    let total = use_state(|| 0.0f64);
    let loading = use_state(|| true);
    let selected_date = use_state(|| Option::<NaiveDate>::None);
    let search = use_state(String::new);

    {
        let service = ItemService::new(props.api.clone());
        let items = items.clone();
        let total = total.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match service.get_this_week().await {
                    Ok(res) => {
                        items.set(res.data);
                        total.set(res.total);
                    }
                    Err(message) => {
                        gloo::console::error!("Failed to load this week's items:", message);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let filter = WeekFilter {
        date: *selected_date,
        search: (*search).clone(),
    };
    let filtered = filter_items(&items, &filter);
    let groups = group_by_day(&filtered);
    // Whole-period total comes from the server; a filtered subset is summed
    // locally. The two can legitimately differ.
    let shown_total = displayed_total(*total, &filtered, filter.is_active());
    let total_label = if let Some(date) = *selected_date {
        format!("Total for {}", date_utils::iso_date(date))
    } else if !search.trim().is_empty() {
        "Total for Search".to_string()
    } else {
        "Total for the Week".to_string()
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let chips = week_dates(date_utils::today());

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"This Week's Items"}</h1>
                <p class="subtitle">{"Your spending, grouped by day"}</p>
            </div>

            <div class="filters">
                <div class="chip-row">
                    {for chips.iter().map(|chip| {
                        let date = *chip;
                        let active = *selected_date == Some(date);
                        let onclick = {
                            let selected_date = selected_date.clone();
                            Callback::from(move |_: MouseEvent| {
                                selected_date.set(if active { None } else { Some(date) });
                            })
                        };
                        let class = if active { "chip active" } else { "chip" };
                        html! {
                            <button key={date_utils::iso_date(date)} {class} {onclick}>
                                {date_utils::format_chip(date)}
                            </button>
                        }
                    })}
                </div>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search item..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>

            {if *loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else {
                html! {
                    <>
                        {if groups.is_empty() {
                            html! { <div class="empty">{"No items found this week"}</div> }
                        } else {
                            html! {
                                {for groups.iter().map(|(day, day_items)| html! {
                                    <div class="day-group" key={date_utils::iso_date(*day)}>
                                        <h2>{date_utils::format_day_heading(*day)}</h2>
                                        <ItemsTable items={day_items.clone()} />
                                    </div>
                                })}
                            }
                        }}
                        <div class="card total-card">
                            <p class="total-label">{total_label}</p>
                            <p class="amount">{format!("₹{}", shown_total)}</p>
                        </div>
                    </>
                }
            }}
        </div>
    }
}
