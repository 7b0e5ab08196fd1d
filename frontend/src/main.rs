mod components;
mod hooks;
mod pages;
mod services;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::layout::Layout;
use components::toast::{ToastAction, ToastEntry, ToastStack, ToastState, NOTICE_DURATION_MS};
use pages::analytics::AnalyticsPage;
use pages::expense_entry::ExpenseEntryPage;
use pages::month::MonthPage;
use pages::overall::OverallPage;
use pages::sign_in::SignInPage;
use pages::sign_up::SignUpPage;
use pages::today::TodayPage;
use pages::week::WeekPage;
use pages::welcome::WelcomePage;
use services::api::ApiClient;
use services::notify::Notice;
use services::session::{stored_token, SessionFlag, SessionStore};
use shared::AuthData;

/// Every screen in the app. Navigation is plain state, no URL routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    SignIn,
    SignUp,
    Expenses,
    Today,
    Week,
    Month,
    Overall,
    Analytics,
}

impl Route {
    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Welcome | Route::SignIn | Route::SignUp)
    }
}

#[function_component(App)]
fn app() -> Html {
    let route = use_state(|| Route::Welcome);
    let session = use_state(|| None);
    let session_active = use_memo((), |_| SessionFlag::default());
    let store = SessionStore::new(session.clone(), (*session_active).clone());
    // Gate rendering until the persisted token (if any) is restored, so a
    // reload on a protected screen does not flash the sign-in page.
    let booting = use_state(|| true);

    let toasts = use_reducer(ToastState::default);
    let toast_seq = use_mut_ref(|| 0u32);
    let notify = {
        let toasts = toasts.clone();
        use_callback((), move |notice: Notice, _| {
            let id = {
                let mut seq = toast_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            toasts.dispatch(ToastAction::Push(ToastEntry { id, notice }));
            let toasts = toasts.clone();
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_DURATION_MS).await;
                toasts.dispatch(ToastAction::Dismiss(id));
            });
        })
    };

    // One client for the whole app; it must be stable across renders so the
    // unauthorized handler registered below stays attached.
    let api = use_memo(notify.clone(), |notify| ApiClient::new(notify.clone()));

    {
        let store = store.clone();
        let booting = booting.clone();
        use_effect_with((), move |_| {
            if let Some(token) = stored_token() {
                store.restore(token);
            }
            booting.set(false);
            || ()
        });
    }

    // Forced logout on 401: drop the session silently (the client already
    // raised the session-expired notice) and land on the sign-in page.
    {
        let api = api.clone();
        let store = store.clone();
        let route = route.clone();
        use_effect_with((), move |_| {
            api.set_unauthorized_handler(Callback::from(move |_| {
                store.logout();
                route.set(Route::SignIn);
            }));
            || ()
        });
    }

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    let on_logout = {
        let store = store.clone();
        let route = route.clone();
        let notify = notify.clone();
        Callback::from(move |_| {
            if store.logout() {
                notify.emit(Notice::info("You've been logged out."));
            }
            route.set(Route::SignIn);
        })
    };

    let on_authenticated = {
        let store = store.clone();
        let route = route.clone();
        Callback::from(move |auth: AuthData| {
            store.login(auth.token, auth.user);
            route.set(Route::Welcome);
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let authenticated = store.is_authenticated();
    let user_name = store.user().map(|user| user.name);
    let active_route = if route.requires_auth() && !authenticated {
        Route::SignIn
    } else {
        *route
    };

    let screen = if *booting {
        html! { <div class="loading">{"Loading..."}</div> }
    } else {
        match active_route {
            Route::SignIn => html! {
                <SignInPage
                    api={(*api).clone()}
                    notify={notify.clone()}
                    on_authenticated={on_authenticated.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
            Route::SignUp => html! {
                <SignUpPage
                    api={(*api).clone()}
                    notify={notify.clone()}
                    on_authenticated={on_authenticated.clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
            other => {
                let inner = match other {
                    Route::Welcome => html! {
                        <WelcomePage
                            authenticated={authenticated}
                            user_name={user_name.clone()}
                            on_navigate={on_navigate.clone()}
                        />
                    },
                    Route::Expenses => html! {
                        <ExpenseEntryPage api={(*api).clone()} notify={notify.clone()} />
                    },
                    Route::Today => html! { <TodayPage api={(*api).clone()} /> },
                    Route::Week => html! { <WeekPage api={(*api).clone()} /> },
                    Route::Month => html! { <MonthPage api={(*api).clone()} /> },
                    Route::Overall => html! { <OverallPage api={(*api).clone()} /> },
                    Route::Analytics => html! { <AnalyticsPage api={(*api).clone()} /> },
                    Route::SignIn | Route::SignUp => unreachable!(),
                };
                html! {
                    <Layout
                        active={other}
                        authenticated={authenticated}
                        user_name={user_name.clone()}
                        on_navigate={on_navigate.clone()}
                        on_logout={on_logout.clone()}
                    >
                        {inner}
                    </Layout>
                }
            }
        }
    };

    html! {
        <>
            <ToastStack entries={toasts.entries.clone()} on_dismiss={on_dismiss} />
            {screen}
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
