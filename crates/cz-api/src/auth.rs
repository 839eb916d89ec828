//! Public endpoints: event listing and login.

use cz_core::entities::Event;
use cz_core::requests::{Credentials, LoginResponse};
use reqwest::Method;

use crate::http::{check_response, read_json, read_list};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /api/auth/events`. Needs no token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn public_events(&self) -> Result<Vec<Event>, ApiError> {
        let resp = check_response(self.request(Method::GET, "/api/auth/events").send().await?).await?;
        read_list(resp).await
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on rejected credentials (usually 400 or 401 with a
    /// message) or transport failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        tracing::info!(username = %credentials.username, "logging in");
        let resp = check_response(
            self.request(Method::POST, "/api/auth/login")
                .json(credentials)
                .send()
                .await?,
        )
        .await?;
        let response: LoginResponse = read_json(resp).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Parse("login response carried no token".into()));
        }
        Ok(response)
    }
}
