//! Expenses charged against an event, and the event's expense categories.

use cz_core::entities::{Deduction, ExpenseCategory};
use cz_core::requests::DeductionInput;
use reqwest::Method;

use crate::http::{check_response, read_list};
use crate::{ApiClient, ApiError, segment};

impl ApiClient {
    /// `GET /api/deductions?eventId=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn list_deductions(&self, event_id: &str) -> Result<Vec<Deduction>, ApiError> {
        let path = format!("/api/deductions?eventId={}", urlencoding::encode(event_id));
        let resp = check_response(self.request(Method::GET, &path).send().await?).await?;
        read_list(resp).await
    }

    /// `POST /api/deductions`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending when logged out.
    pub async fn create_deduction(&self, input: &DeductionInput) -> Result<(), ApiError> {
        let builder = self.authed(Method::POST, "/api/deductions")?.json(input);
        Self::execute(builder).await
    }

    /// `DELETE /api/deductions/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] without sending when logged out.
    pub async fn delete_deduction(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/api/deductions/{}", segment(id));
        Self::execute(self.authed(Method::DELETE, &path)?).await
    }

    /// `GET /api/events/{id}/categories`. Public.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn event_categories(&self, event_id: &str) -> Result<Vec<ExpenseCategory>, ApiError> {
        let path = format!("/api/events/{}/categories", segment(event_id));
        let resp = check_response(self.request(Method::GET, &path).send().await?).await?;
        read_list(resp).await
    }
}
