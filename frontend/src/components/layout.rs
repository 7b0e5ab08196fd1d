use yew::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub active: Route,
    pub authenticated: bool,
    #[prop_or_default]
    pub user_name: Option<String>,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-shell">
            <Sidebar
                active={props.active}
                authenticated={props.authenticated}
                user_name={props.user_name.clone()}
                on_navigate={props.on_navigate.clone()}
                on_logout={props.on_logout.clone()}
            />
            <main class="main-content">
                {props.children.clone()}
            </main>
        </div>
    }
}
