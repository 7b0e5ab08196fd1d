use shared::{ApiEnvelope, AuthData, SignInRequest, SignUpRequest};

use crate::services::api::ApiClient;

const SIGN_UP_FALLBACK: &str = "Failed to create your account";
const SIGN_IN_FALLBACK: &str = "Invalid email or password";

/// Thin wrapper over the auth endpoints. Advisory input validation lives in
/// `shared::validation` and runs in the forms before these are called; the
/// server remains the authority.
#[derive(Clone, PartialEq)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthData, String> {
        let body = SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope: ApiEnvelope<AuthData> = self
            .api
            .post_json("/auth/signup", &body)
            .await
            .map_err(|err| err.or_fallback(SIGN_UP_FALLBACK))?;
        envelope.into_result(SIGN_UP_FALLBACK)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthData, String> {
        let body = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope: ApiEnvelope<AuthData> = self
            .api
            .post_json("/auth/signin", &body)
            .await
            .map_err(|err| err.or_fallback(SIGN_IN_FALLBACK))?;
        envelope.into_result(SIGN_IN_FALLBACK)
    }
}
