use shared::AnalyticsSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::items::ItemService;

#[derive(Properties, PartialEq)]
pub struct AnalyticsPageProps {
    pub api: ApiClient,
}

#[function_component(AnalyticsPage)]
pub fn analytics_page(props: &AnalyticsPageProps) -> Html {
    let summary = use_state(|| Option::<AnalyticsSummary>::None);
    let loading = use_state(|| true);

    {
        let service = ItemService::new(props.api.clone());
        let summary = summary.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match service.get_analytics().await {
                    Ok(data) => summary.set(Some(data)),
                    Err(message) => {
                        gloo::console::error!("Failed to load analytics:", message);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let cards: Vec<(&str, &str, f64)> = match &*summary {
        Some(s) => vec![
            ("Today", "Spent since midnight", s.today),
            ("This Week", "Monday through today", s.week),
            ("This Month", "Month to date", s.month),
            ("Overall", "Everything on record", s.overall),
        ],
        None => Vec::new(),
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Analytics"}</h1>
                <p class="subtitle">{"Spending totals at a glance"}</p>
            </div>

            {if *loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else if cards.is_empty() {
                html! { <div class="empty">{"Analytics are unavailable right now."}</div> }
            } else {
                html! {
                    <div class="analytics-grid">
                        {for cards.iter().map(|(title, caption, amount)| html! {
                            <div class="card stat-card" key={*title}>
                                <h2>{*title}</h2>
                                <p class="amount">{format!("₹{}", amount)}</p>
                                <p class="subtitle">{*caption}</p>
                            </div>
                        })}
                    </div>
                }
            }}
        </div>
    }
}
