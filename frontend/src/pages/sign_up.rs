use shared::{validate_sign_up, AuthData, SignUpRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::auth::AuthService;
use crate::services::notify::{Notice, Notifier};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SignUpPageProps {
    pub api: ApiClient,
    pub notify: Notifier,
    pub on_authenticated: Callback<AuthData>,
    pub on_navigate: Callback<Route>,
}

#[function_component(SignUpPage)]
pub fn sign_up_page(props: &SignUpPageProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let api = props.api.clone();
        let notify = props.notify.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let request = SignUpRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let errors = validate_sign_up(&request.name, &request.email, &request.password);
            if !errors.is_empty() {
                for err in errors {
                    notify.emit(Notice::error(err.to_string()));
                }
                return;
            }
            let submitting = submitting.clone();
            let service = AuthService::new(api.clone());
            let notify = notify.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                submitting.set(true);
                match service
                    .sign_up(&request.name, &request.email, &request.password)
                    .await
                {
                    Ok(auth) => {
                        notify.emit(Notice::success("Account created. Welcome!".to_string()));
                        on_authenticated.emit(auth);
                    }
                    Err(message) => notify.emit(Notice::error(message)),
                }
                submitting.set(false);
            });
        })
    };

    let go_sign_in = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::SignIn))
    };

    html! {
        <div class="auth-page">
            <form class="card auth-card" onsubmit={on_submit}>
                <h1>{"Sign Up"}</h1>
                <p class="subtitle">{"Create an account to start tracking"}</p>

                <label class="field">
                    {"Name"}
                    <input
                        type="text"
                        placeholder="Your name"
                        value={(*name).clone()}
                        oninput={on_name}
                        disabled={*submitting}
                    />
                </label>
                <label class="field">
                    {"Email"}
                    <input
                        type="email"
                        placeholder="you@example.com"
                        value={(*email).clone()}
                        oninput={on_email}
                        disabled={*submitting}
                    />
                </label>
                <label class="field">
                    {"Password"}
                    <input
                        type="password"
                        placeholder="At least 6 characters"
                        value={(*password).clone()}
                        oninput={on_password}
                        disabled={*submitting}
                    />
                </label>

                <button
                    type="submit"
                    class="btn primary"
                    disabled={*submitting
                        || name.trim().is_empty()
                        || email.trim().is_empty()
                        || password.is_empty()}
                >
                    {if *submitting { "Creating account..." } else { "Sign Up" }}
                </button>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <a onclick={go_sign_in}>{"Sign in"}</a>
                </p>
            </form>
        </div>
    }
}
