use shared::StoredItem;
use yew::prelude::*;

use crate::services::date_utils::{format_date, format_time};

#[derive(Properties, PartialEq)]
pub struct ItemsTableProps {
    pub items: Vec<StoredItem>,
    /// Month/Overall show the date column; day-scoped tables omit it.
    #[prop_or(false)]
    pub show_date: bool,
    /// Rendered as a full-width row when the table is empty.
    #[prop_or_default]
    pub empty_message: AttrValue,
}

#[function_component(ItemsTable)]
pub fn items_table(props: &ItemsTableProps) -> Html {
    let columns = if props.show_date { 6 } else { 5 };
    html! {
        <div class="table-container">
            <table class="items-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Price"}</th>
                        <th>{"Qty"}</th>
                        <th>{"Total"}</th>
                        {if props.show_date { html! { <th>{"Date"}</th> } } else { html! {} }}
                        <th>{"Time"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.items.is_empty() && !props.empty_message.is_empty() {
                        html! {
                            <tr>
                                <td colspan={columns.to_string()} class="empty">
                                    {props.empty_message.clone()}
                                </td>
                            </tr>
                        }
                    } else {
                        html! {
                            {for props.items.iter().map(|item| html! {
                                <tr key={item.id.clone()}>
                                    <td class="name">{&item.name}</td>
                                    <td>{format!("₹{}", item.price)}</td>
                                    <td>{item.quantity}</td>
                                    <td class="total">{format!("₹{}", item.total_price)}</td>
                                    {if props.show_date {
                                        html! { <td>{format_date(&item.created_at)}</td> }
                                    } else {
                                        html! {}
                                    }}
                                    <td>{format_time(&item.created_at)}</td>
                                </tr>
                            })}
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
