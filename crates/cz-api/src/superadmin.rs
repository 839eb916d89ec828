//! Super-admin console endpoints. Every call needs a token.

use cz_core::entities::{AdminAccount, AuditLogEntry, Event, ExpenseCategory};
use cz_core::requests::{
    AdminUpdate, CategoryUpdate, EventUpdate, NewAdmin, NewCategory, NewEvent,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{check_response, read_list};
use crate::{ApiClient, ApiError, segment};

const ADMINS: &str = "/api/superadmin/admins";
const EVENTS: &str = "/api/superadmin/events";
const CATEGORIES: &str = "/api/superadmin/categories";
const LOGS: &str = "/api/superadmin/logs";

impl ApiClient {
    async fn list_authed<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let resp = check_response(self.authed(Method::GET, path)?.send().await?).await?;
        read_list(resp).await
    }

    async fn send_authed<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let mut builder = self.authed(method, path)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Self::execute(builder).await
    }

    // ── Admin accounts ─────────────────────────────────────────────

    /// `GET /api/superadmin/admins`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn list_admins(&self) -> Result<Vec<AdminAccount>, ApiError> {
        self.list_authed(ADMINS).await
    }

    /// `POST /api/superadmin/admins`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn create_admin(&self, admin: &NewAdmin) -> Result<(), ApiError> {
        self.send_authed(Method::POST, ADMINS, Some(admin)).await
    }

    /// `PUT /api/superadmin/admins/{id}` with only the fields being changed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn update_admin(&self, id: &str, update: &AdminUpdate) -> Result<(), ApiError> {
        let path = format!("{ADMINS}/{}", segment(id));
        self.send_authed(Method::PUT, &path, Some(update)).await
    }

    /// `DELETE /api/superadmin/admins/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn delete_admin(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{ADMINS}/{}", segment(id));
        self.send_authed::<()>(Method::DELETE, &path, None).await
    }

    // ── Events ─────────────────────────────────────────────────────

    /// `GET /api/superadmin/events`, including inactive events.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn list_all_events(&self) -> Result<Vec<Event>, ApiError> {
        self.list_authed(EVENTS).await
    }

    /// `POST /api/superadmin/events`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn create_event(&self, event: &NewEvent) -> Result<(), ApiError> {
        self.send_authed(Method::POST, EVENTS, Some(event)).await
    }

    /// `PUT /api/superadmin/events/{id}` (rename and/or toggle active).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn update_event(&self, id: &str, update: &EventUpdate) -> Result<(), ApiError> {
        let path = format!("{EVENTS}/{}", segment(id));
        self.send_authed(Method::PUT, &path, Some(update)).await
    }

    /// `DELETE /api/superadmin/events/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{EVENTS}/{}", segment(id));
        self.send_authed::<()>(Method::DELETE, &path, None).await
    }

    // ── Expense categories ─────────────────────────────────────────

    /// `GET /api/superadmin/categories`, across all events.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn list_all_categories(&self) -> Result<Vec<ExpenseCategory>, ApiError> {
        self.list_authed(CATEGORIES).await
    }

    /// `POST /api/superadmin/categories`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn create_category(&self, category: &NewCategory) -> Result<(), ApiError> {
        self.send_authed(Method::POST, CATEGORIES, Some(category)).await
    }

    /// `PUT /api/superadmin/categories/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn rename_category(&self, id: &str, update: &CategoryUpdate) -> Result<(), ApiError> {
        let path = format!("{CATEGORIES}/{}", segment(id));
        self.send_authed(Method::PUT, &path, Some(update)).await
    }

    /// `DELETE /api/superadmin/categories/{id}`. Existing deductions keep
    /// their category text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{CATEGORIES}/{}", segment(id));
        self.send_authed::<()>(Method::DELETE, &path, None).await
    }

    // ── Audit log ──────────────────────────────────────────────────

    /// `GET /api/superadmin/logs`, newest first as the backend orders them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if logged out, refused, or the request fails.
    pub async fn audit_logs(&self) -> Result<Vec<AuditLogEntry>, ApiError> {
        self.list_authed(LOGS).await
    }
}
