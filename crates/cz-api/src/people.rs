//! Payment records ("people" on the backend).

use cz_core::entities::PaymentRecord;
use cz_core::requests::PaymentInput;
use reqwest::Method;

use crate::http::{check_response, read_list};
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// `GET /api/people?eventId=`. The token is attached when present.
    ///
    /// # Errors
    ///
    /// A 400 ([`ApiError::BadRequest`]) means the event id is unusable.
    pub async fn list_people(&self, event_id: &str) -> Result<Vec<PaymentRecord>, ApiError> {
        let path = format!("/api/people?eventId={}", urlencoding::encode(event_id));
        let resp = check_response(self.request(Method::GET, &path).send().await?).await?;
        read_list(resp).await
    }

    /// `POST /api/people`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending when logged out.
    pub async fn create_person(&self, input: &PaymentInput) -> Result<(), ApiError> {
        let builder = self.authed(Method::POST, "/api/people")?.json(input);
        Self::execute(builder).await
    }

    /// `PUT /api/people/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending when logged out.
    pub async fn update_person(&self, id: &str, input: &PaymentInput) -> Result<(), ApiError> {
        let path = format!("/api/people/{}", segment(id));
        let builder = self.authed(Method::PUT, &path)?.json(input);
        Self::execute(builder).await
    }

    /// `DELETE /api/people/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending when logged out.
    pub async fn delete_person(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/people/{}", segment(id));
        Self::execute(self.authed(Method::DELETE, &path)?).await
    }
}
