use yew::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
    pub authenticated: bool,
    #[prop_or_default]
    pub user_name: Option<String>,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

fn nav_items(authenticated: bool) -> Vec<(Route, &'static str)> {
    if authenticated {
        vec![
            (Route::Welcome, "Welcome"),
            (Route::Expenses, "Expense Calculator"),
            (Route::Today, "Today"),
            (Route::Week, "This Week"),
            (Route::Month, "This Month"),
            (Route::Overall, "Overall"),
            (Route::Analytics, "Analytics"),
        ]
    } else {
        vec![
            (Route::Welcome, "Welcome"),
            (Route::SignIn, "Sign In"),
            (Route::SignUp, "Sign Up"),
        ]
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>{"Expense Tracker"}</h2>
                {if let Some(name) = props.user_name.as_ref() {
                    html! { <p class="sidebar-user">{name}</p> }
                } else {
                    html! {}
                }}
            </div>
            <nav class="sidebar-nav">
                {for nav_items(props.authenticated).into_iter().map(|(route, label)| {
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(route))
                    };
                    let class = if route == props.active { "nav-link active" } else { "nav-link" };
                    html! { <button key={label} {class} {onclick}>{label}</button> }
                })}
            </nav>
            {if props.authenticated {
                html! {
                    <button class="nav-link logout" onclick={logout}>{"Log Out"}</button>
                }
            } else {
                html! {}
            }}
        </aside>
    }
}
