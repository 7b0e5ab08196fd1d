use shared::{validate_sign_in, AuthData, SignInRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::auth::AuthService;
use crate::services::notify::{Notice, Notifier};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SignInPageProps {
    pub api: ApiClient,
    pub notify: Notifier,
    pub on_authenticated: Callback<AuthData>,
    pub on_navigate: Callback<Route>,
}

#[function_component(SignInPage)]
pub fn sign_in_page(props: &SignInPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let submitting = use_state(|| false);

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
            let request = SignInRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let errors = validate_sign_in(&request.email, &request.password);
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
                match service.sign_in(&request.email, &request.password).await {
                    Ok(auth) => {
                        notify.emit(Notice::success(format!(
                            "Welcome back, {}!",
                            auth.user.name
                        )));
                        on_authenticated.emit(auth);
                    }
                    Err(message) => notify.emit(Notice::error(message)),
                }
                submitting.set(false);
            });
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let go_sign_up = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::SignUp))
    };

    html! {
        <div class="auth-page">
            <form class="card auth-card" onsubmit={on_submit}>
                <h1>{"Sign In"}</h1>
                <p class="subtitle">{"Log in to keep tracking your expenses"}</p>

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
                    <div class="password-field">
                        <input
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Your password"
                            value={(*password).clone()}
                            oninput={on_password}
                            disabled={*submitting}
                        />
                        <button type="button" class="toggle-password" onclick={toggle_password}>
                            {if *show_password { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>

                <button
                    type="submit"
                    class="btn primary"
                    disabled={*submitting || email.trim().is_empty() || password.is_empty()}
                >
                    {if *submitting { "Signing in..." } else { "Sign In" }}
                </button>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <a onclick={go_sign_up}>{"Sign up"}</a>
                </p>
            </form>
        </div>
    }
}
