use std::rc::Rc;

use yew::prelude::*;

use crate::services::notify::{Notice, NoticeKind};

/// How long a notice stays on screen before auto-dismissing.
pub const NOTICE_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Debug, Default, PartialEq)]
pub struct ToastState {
    pub entries: Vec<ToastEntry>,
}

pub enum ToastAction {
    Push(ToastEntry),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut entries = self.entries.clone();
        match action {
            ToastAction::Push(entry) => entries.push(entry),
            ToastAction::Dismiss(id) => entries.retain(|entry| entry.id != id),
        }
        Rc::new(Self { entries })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub entries: Vec<ToastEntry>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            {for props.entries.iter().map(|entry| {
                let class = match entry.notice.kind {
                    NoticeKind::Success => "toast success",
                    NoticeKind::Error => "toast error",
                    NoticeKind::Info => "toast info",
                };
                let onclick = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = entry.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={entry.id.to_string()} {class} {onclick}>
                        {&entry.notice.message}
                    </div>
                }
            })}
        </div>
    }
}
