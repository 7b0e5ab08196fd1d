use shared::EntryForm;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::items::ItemService;
use crate::services::notify::{Notice, Notifier};

/// State and actions for the multi-row entry form.
///
/// The workflow is Editing -> Submitting -> Editing: a successful submission
/// resets to a single blank row, a failed one keeps the rows intact so a
/// manual retry is just pressing save again. `submitting` is cleared on both
/// paths.
pub struct ExpenseEntry {
    pub form: UseStateHandle<EntryForm>,
    pub submitting: UseStateHandle<bool>,
    pub add_row: Callback<()>,
    pub remove_row: Callback<u32>,
    pub edit_name: Callback<(u32, String)>,
    pub edit_quantity: Callback<(u32, String)>,
    pub edit_price: Callback<(u32, String)>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_expense_entry(items: &ItemService, notify: &Notifier) -> ExpenseEntry {
    let form = use_state(EntryForm::new);
    let submitting = use_state(|| false);

    let add_row = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.add_row();
            form.set(next);
        })
    };

    let remove_row = {
        let form = form.clone();
        Callback::from(move |id: u32| {
            let mut next = (*form).clone();
            next.remove_row(id);
            form.set(next);
        })
    };

    let edit_name = {
        let form = form.clone();
        Callback::from(move |(id, value): (u32, String)| {
            let mut next = (*form).clone();
            next.set_name(id, value);
            form.set(next);
        })
    };

    // Raw input strings are parsed here; a blank or malformed quantity falls
    // back to 1 and a malformed price to 0, matching the input constraints.
    let edit_quantity = {
        let form = form.clone();
        Callback::from(move |(id, value): (u32, String)| {
            let mut next = (*form).clone();
            next.set_quantity(id, value.trim().parse::<u32>().unwrap_or(1));
            form.set(next);
        })
    };

    let edit_price = {
        let form = form.clone();
        Callback::from(move |(id, value): (u32, String)| {
            let mut next = (*form).clone();
            next.set_price(id, value.trim().parse::<f64>().unwrap_or(0.0));
            form.set(next);
        })
    };

    let submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let items = items.clone();
        let notify = notify.clone();
        Callback::from(move |_| {
            if form.is_save_disabled() || *submitting {
                return;
            }
            let form = form.clone();
            let submitting = submitting.clone();
            let items = items.clone();
            let notify = notify.clone();
            spawn_local(async move {
                submitting.set(true);
                match items.create_items(&form).await {
                    Ok(_saved) => {
                        notify.emit(Notice::success("Items saved successfully!"));
                        let mut next = (*form).clone();
                        next.reset();
                        form.set(next);
                    }
                    Err(message) => {
                        notify.emit(Notice::error(format!("Error: {message}")));
                    }
                }
                // Runs on both paths, so the form always returns to editing.
                submitting.set(false);
            });
        })
    };

    ExpenseEntry {
        form,
        submitting,
        add_row,
        remove_row,
        edit_name,
        edit_quantity,
        edit_price,
        submit,
    }
}
