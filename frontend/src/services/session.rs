use std::cell::Cell;
use std::rc::Rc;

use gloo::storage::{LocalStorage, Storage};
use shared::User;
use yew::prelude::*;

/// The one durably persisted piece of client state: a single token string.
pub const TOKEN_KEY: &str = "token";

/// The authenticated user's credential plus profile. Only the token survives
/// a reload; the profile exists for the lifetime of the session that created
/// it (sign-in and sign-up are the only sources of a profile).
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

pub fn stored_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY).ok()
}

/// Synchronous mirror of "a session exists", shared by every store clone.
/// State-handle reads lag by a render, so teardown de-duplication within a
/// burst of 401s keys off this flag: `clear` reports true only for the call
/// that actually cleared it.
#[derive(Debug, Clone, Default)]
pub struct SessionFlag(Rc<Cell<bool>>);

impl SessionFlag {
    pub fn set_active(&self) {
        self.0.set(true);
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    pub fn clear(&self) -> bool {
        let was_active = self.0.get();
        self.0.set(false);
        was_active
    }
}

impl PartialEq for SessionFlag {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Handle to the single cross-cutting session state. Clones share the same
/// underlying state; mutation happens only through `login`/`logout`/`restore`.
#[derive(Clone)]
pub struct SessionStore {
    session: UseStateHandle<Option<Session>>,
    active: SessionFlag,
}

impl SessionStore {
    pub fn new(session: UseStateHandle<Option<Session>>, active: SessionFlag) -> Self {
        Self { session, active }
    }

    /// Establishes a session and persists the token.
    pub fn login(&self, token: String, user: User) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token.clone()) {
            gloo::console::warn!("Failed to persist session token:", err.to_string());
        }
        self.active.set_active();
        self.session.set(Some(Session {
            token,
            user: Some(user),
        }));
    }

    /// Re-establishes a session from a previously persisted token during the
    /// bootstrap window.
    pub fn restore(&self, token: String) {
        self.active.set_active();
        self.session.set(Some(Session { token, user: None }));
    }

    /// Clears the session and removes the persisted token. Returns whether a
    /// session was actually cleared; the second call of a burst is a no-op.
    pub fn logout(&self) -> bool {
        if !self.active.clear() {
            return false;
        }
        LocalStorage::delete(TOKEN_KEY);
        self.session.set(None);
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_active()
    }

    pub fn user(&self) -> Option<User> {
        self.session.as_ref().and_then(|session| session.user.clone())
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.active == other.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_the_flag_twice_reports_once() {
        let flag = SessionFlag::default();
        flag.set_active();
        assert!(flag.is_active());
        assert!(flag.clear());
        assert!(!flag.clear());
        assert!(!flag.is_active());
    }

    #[test]
    fn clear_before_activation_is_a_no_op() {
        let flag = SessionFlag::default();
        assert!(!flag.clear());
    }

    #[test]
    fn clones_share_the_underlying_flag() {
        let flag = SessionFlag::default();
        let clone = flag.clone();
        clone.set_active();
        assert!(flag.is_active());
        assert!(flag.clear());
        assert!(!clone.is_active());
    }

    #[test]
    fn burst_of_unauthorized_responses_tears_down_once() {
        // Two 401s from in-flight requests land back to back; the handler
        // runs for each, but only the first clear performs the teardown.
        let flag = SessionFlag::default();
        flag.set_active();

        let teardowns = Rc::new(Cell::new(0u32));
        let handler = {
            let flag = flag.clone();
            let teardowns = Rc::clone(&teardowns);
            Callback::from(move |_: ()| {
                if flag.clear() {
                    teardowns.set(teardowns.get() + 1);
                }
            })
        };

        handler.emit(());
        handler.emit(());
        assert_eq!(teardowns.get(), 1);
        assert!(!flag.is_active());
    }
}
