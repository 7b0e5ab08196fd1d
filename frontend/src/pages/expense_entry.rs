use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_expense_entry::use_expense_entry;
use crate::services::api::ApiClient;
use crate::services::items::ItemService;
use crate::services::notify::Notifier;

#[derive(Properties, PartialEq)]
pub struct ExpenseEntryPageProps {
    pub api: ApiClient,
    pub notify: Notifier,
}

#[function_component(ExpenseEntryPage)]
pub fn expense_entry_page(props: &ExpenseEntryPageProps) -> Html {
    let items = ItemService::new(props.api.clone());
    let entry = use_expense_entry(&items, &props.notify);

    let rows = entry.form.rows().to_vec();
    let grand_total = entry.form.grand_total();
    let save_disabled = entry.form.is_save_disabled() || *entry.submitting;
    let single_row = rows.len() == 1;

    let on_add = {
        let add_row = entry.add_row.clone();
        Callback::from(move |_: MouseEvent| add_row.emit(()))
    };
    let on_save = {
        let submit = entry.submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    html! {
        <div class="page expense-entry">
            <div class="page-header">
                <h1>{"Expense Calculator"}</h1>
                <p class="subtitle">{"Build a batch of line items and save them in one go"}</p>
            </div>

            <div class="entry-toolbar">
                <button class="btn primary" onclick={on_add} disabled={*entry.submitting}>
                    {"Add New Item"}
                </button>
                <span class="row-count">
                    {format!("Total items: {}", rows.len())}
                </span>
            </div>

            <div class="entry-rows">
                {for rows.iter().map(|row| {
                    let id = row.id;
                    // Per-keystroke, so the line and grand totals track the
                    // fields without waiting for a blur.
                    let on_name = {
                        let edit = entry.edit_name.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            edit.emit((id, input.value()));
                        })
                    };
                    let on_quantity = {
                        let edit = entry.edit_quantity.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            edit.emit((id, input.value()));
                        })
                    };
                    let on_price = {
                        let edit = entry.edit_price.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            edit.emit((id, input.value()));
                        })
                    };
                    let on_remove = {
                        let remove = entry.remove_row.clone();
                        Callback::from(move |_: MouseEvent| remove.emit(id))
                    };
                    html! {
                        <div class="card entry-row" key={id.to_string()}>
                            <label class="field name">
                                {"Item Name"}
                                <input
                                    type="text"
                                    placeholder="Enter item name"
                                    value={row.name.clone()}
                                    oninput={on_name}
                                    disabled={*entry.submitting}
                                />
                            </label>
                            <label class="field">
                                {"Quantity"}
                                <input
                                    type="number"
                                    min="1"
                                    value={row.quantity.to_string()}
                                    oninput={on_quantity}
                                    disabled={*entry.submitting}
                                />
                            </label>
                            <label class="field">
                                {"Price (₹)"}
                                <input
                                    type="number"
                                    min="0"
                                    step="1"
                                    value={if row.price > 0.0 { row.price.to_string() } else { String::new() }}
                                    oninput={on_price}
                                    disabled={*entry.submitting}
                                />
                            </label>
                            <div class="field line-total">
                                {"Total (₹)"}
                                <div class="line-total-value">{format!("₹{:.2}", row.total)}</div>
                            </div>
                            <button
                                class="btn danger"
                                onclick={on_remove}
                                disabled={single_row || *entry.submitting}
                            >
                                {"Remove"}
                            </button>
                        </div>
                    }
                })}
            </div>

            <div class="card grand-total">
                <div>
                    <h2>{"Grand Total"}</h2>
                    <p class="amount">{format!("₹{:.2}", grand_total)}</p>
                    <p class="row-count">
                        {format!("{} item{}", rows.len(), if single_row { "" } else { "s" })}
                    </p>
                </div>
                <button class="btn primary save" disabled={save_disabled} onclick={on_save}>
                    {if *entry.submitting { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
