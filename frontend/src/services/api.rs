use std::cell::RefCell;
use std::rc::Rc;

use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ApiEnvelope;
use yew::prelude::*;

use crate::services::notify::{Notice, Notifier};
use crate::services::session::stored_token;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

pub const SESSION_EXPIRED_MESSAGE: &str = "Session timed out. Please log in again.";

/// Outcome of a failed request, before a service maps it to its own
/// user-facing message. `server_message` is set when the response body
/// carried the standard envelope with a non-empty message.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    pub status: Option<u16>,
    pub server_message: Option<String>,
}

impl RequestError {
    fn transport() -> Self {
        Self {
            status: None,
            server_message: None,
        }
    }

    /// The normalized message call-sites surface: the server's own message
    /// when present, else the per-operation fallback.
    pub fn or_fallback(self, fallback: &str) -> String {
        self.server_message
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// The single HTTP client every service goes through. Attaches the bearer
/// token to each outgoing request when one is stored, and intercepts 401
/// responses: one session-expired notice per failing response, then the
/// registered logout handler. The error still reaches the caller afterwards
/// so call-sites can react locally.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    notify: Notifier,
    unauthorized: Rc<RefCell<Option<Callback<()>>>>,
}

impl ApiClient {
    pub fn new(notify: Notifier) -> Self {
        let base_url = option_env!("EXPENSE_API_BASE_URL")
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        Self::with_base_url(base_url, notify)
    }

    pub fn with_base_url(base_url: String, notify: Notifier) -> Self {
        Self {
            base_url,
            notify,
            unauthorized: Rc::new(RefCell::new(None)),
        }
    }

    /// Registers the forced-logout target for 401 responses. The app shell
    /// wires the session store in here at startup; a test can register a stub
    /// and assert it fires.
    pub fn set_unauthorized_handler(&self, handler: Callback<()>) {
        *self.unauthorized.borrow_mut() = Some(handler);
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let sent = self.authorize(Request::get(&self.url(path))).send().await;
        self.handle(sent).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| {
                gloo::console::error!("Failed to serialize request:", err.to_string());
                RequestError::transport()
            })?;
        let sent = request.send().await;
        self.handle(sent).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match stored_token() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    async fn handle<T: DeserializeOwned>(
        &self,
        sent: Result<Response, gloo::net::Error>,
    ) -> Result<T, RequestError> {
        let response = sent.map_err(|err| {
            gloo::console::error!("Network error:", err.to_string());
            RequestError::transport()
        })?;

        self.intercept(&response);

        if !response.ok() {
            let status = response.status();
            let server_message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.trim().is_empty());
            return Err(RequestError {
                status: Some(status),
                server_message,
            });
        }

        response.json::<T>().await.map_err(|err| {
            gloo::console::error!("Failed to parse response:", err.to_string());
            RequestError::transport()
        })
    }

    fn intercept(&self, response: &Response) {
        if response.status() == 401 {
            self.notify.emit(Notice::error(SESSION_EXPIRED_MESSAGE));
            match self.unauthorized.borrow().as_ref() {
                Some(handler) => handler.emit(()),
                None => {
                    gloo::console::warn!("Received 401 but no logout handler is registered")
                }
            }
        }
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.unauthorized, &other.unauthorized)
    }
}
