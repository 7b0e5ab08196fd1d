use yew::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct WelcomePageProps {
    pub authenticated: bool,
    pub user_name: Option<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(WelcomePage)]
pub fn welcome_page(props: &WelcomePageProps) -> Html {
    let greeting = match &props.user_name {
        Some(name) => format!("Welcome back, {}!", name),
        None if props.authenticated => "Welcome back!".to_string(),
        None => "Track your money, one item at a time".to_string(),
    };

    let primary = if props.authenticated {
        let on_navigate = props.on_navigate.clone();
        html! {
            <button
                class="btn primary"
                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Expenses))}
            >
                {"Open the Expense Calculator"}
            </button>
        }
    } else {
        let go_sign_in = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Route::SignIn))
        };
        let go_sign_up = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(Route::SignUp))
        };
        html! {
            <div class="welcome-actions">
                <button class="btn primary" onclick={go_sign_in}>{"Sign In"}</button>
                <button class="btn" onclick={go_sign_up}>{"Sign Up"}</button>
            </div>
        }
    };

    html! {
        <div class="page welcome">
            <div class="card welcome-card">
                <h1>{"Expense Tracker"}</h1>
                <p class="subtitle">{greeting}</p>
                <p>
                    {"Record batches of purchases, then slice them by day, week, \
                      month, or your whole history."}
                </p>
                {primary}
            </div>
        </div>
    }
}
