use shared::StoredItem;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::items_table::ItemsTable;
use crate::services::api::ApiClient;
use crate::services::items::ItemService;

#[derive(Properties, PartialEq)]
pub struct TodayPageProps {
    pub api: ApiClient,
}

#[function_component(TodayPage)]
pub fn today_page(props: &TodayPageProps) -> Html {
    let items = use_state(Vec::<StoredItem>::new);
    let total = use_state(|| 0.0f64);
    let loading = use_state(|| true);

    {
        let service = ItemService::new(props.api.clone());
        let items = items.clone();
        let total = total.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match service.get_today().await {
                    Ok(res) => {
                        items.set(res.data);
                        total.set(res.total);
                    }
                    Err(message) => {
                        gloo::console::error!("Failed to load today's items:", message);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Today's Items"}</h1>
                <p class="subtitle">{"Everything you recorded today"}</p>
            </div>

            {if *loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else {
                html! {
                    <>
                        <ItemsTable
                            items={(*items).clone()}
                            empty_message="No items recorded today"
                        />
                        <div class="card total-card">
                            <p class="total-label">{"Total for Today"}</p>
                            <p class="amount">{format!("₹{}", *total)}</p>
                        </div>
                    </>
                }
            }}
        </div>
    }
}
