//! Typed async client for the insurance API.
//!
//! DESIGN
//! ======
//! One method per server endpoint. Every call attaches the session's bearer
//! token (when one is held), decodes 2xx JSON bodies into the types in
//! [`crate::types`], and folds non-2xx responses into [`ApiError`] with the
//! server's plain-text or JSON message attached. A 401 becomes
//! `ApiError::Unauthorized` so callers can prompt for a fresh login.

use reqwest::{Method, StatusCode, header};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::session::Session;
use crate::types::{
    Claim, ClaimStatus, DashboardStats, LoginRequest, NewOfficer, NewProposal, NewUser, Officer, Payment, Proposal,
    ProposalStatus, Role, TokenResponse, UpdateUser, User,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not logged in")]
    NotLoggedIn,
    #[error("session expired or unauthorized; log in again")]
    Unauthorized,
    #[error("server returned {status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fold a non-success status and its body text into an [`ApiError`].
fn error_for_status(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized;
    }
    ApiError::Server { status, message }
}

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client bound to one server and one session.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, attaching the bearer header when the session holds a
    /// token, and surface non-2xx responses as errors.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match self.session.bearer_header() {
            Some(bearer) => request.header(header::AUTHORIZATION, bearer),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, message));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        let raw = response.text().await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn json_with_body<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.request(method, self.url(path)).json(body)).await?;
        let raw = response.text().await?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn text(&self, method: Method, path: &str) -> Result<String, ApiError> {
        let response = self.send(self.http.request(method, self.url(path))).await?;
        Ok(response.text().await?)
    }

    async fn text_with_body<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        let response = self.send(self.http.request(method, self.url(path)).json(body)).await?;
        Ok(response.text().await?)
    }

    // =========================================================================
    // HEALTH + AUTH
    // =========================================================================

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns an error when the server is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), ApiError> {
        self.send(self.http.get(self.url("/healthz"))).await?;
        Ok(())
    }

    /// `POST /api/auth/register/user`. Returns the server's confirmation
    /// text.
    ///
    /// # Errors
    ///
    /// `Server` with 400 when the email is taken or a field is malformed.
    pub async fn register_user(&self, new_user: &NewUser) -> Result<String, ApiError> {
        self.text_with_body(Method::POST, "/api/auth/register/user", new_user).await
    }

    /// `POST /api/auth/register/officer` (ADMIN).
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a live token, `Server` with 403 below ADMIN.
    pub async fn register_officer(&self, new_officer: &NewOfficer) -> Result<String, ApiError> {
        self.text_with_body(Method::POST, "/api/auth/register/officer", new_officer).await
    }

    /// `POST /api/auth/login`. On success the session stores the token and
    /// identity.
    ///
    /// # Errors
    ///
    /// `Server` with 400 "Invalid credentials" when authentication fails.
    pub async fn login(&mut self, email: &str, password: &str, user_type: Role) -> Result<TokenResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            user_type,
        };
        let outcome: TokenResponse = self.json_with_body(Method::POST, "/api/auth/login", &body).await?;
        self.session.log_in(outcome.token.clone(), outcome.email.clone(), outcome.role);
        Ok(outcome)
    }

    /// `GET /api/auth/validate` — check the stored token against the server.
    ///
    /// # Errors
    ///
    /// `NotLoggedIn` without a stored token, `Server` with 400 when the
    /// token is no longer accepted.
    pub async fn validate(&self) -> Result<TokenResponse, ApiError> {
        if !self.session.is_authenticated() {
            return Err(ApiError::NotLoggedIn);
        }
        self.get_json("/api/auth/validate").await
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// `GET /api/user` (OFFICER+).
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/api/user").await
    }

    /// `GET /api/user/me` — the caller's own policyholder record.
    ///
    /// # Errors
    ///
    /// `Server` with 404 when the caller holds no user record (officers).
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/api/user/me").await
    }

    /// `GET /api/user/{id}`.
    ///
    /// # Errors
    ///
    /// `Server` with 404 when the user does not exist.
    pub async fn get_user(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.get_json(&format!("/api/user/{user_id}")).await
    }

    /// `PUT /api/user/{id}` — partial update; returns the fresh profile.
    ///
    /// # Errors
    ///
    /// `Server` with 400 for malformed fields or a taken email.
    pub async fn update_user(&self, user_id: Uuid, update: &UpdateUser) -> Result<User, ApiError> {
        self.json_with_body(Method::PUT, &format!("/api/user/{user_id}"), update).await
    }

    /// `DELETE /api/user/{id}` (ADMIN).
    ///
    /// # Errors
    ///
    /// `Server` with 403 below ADMIN, 404 when absent.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<String, ApiError> {
        self.text(Method::DELETE, &format!("/api/user/{user_id}")).await
    }

    // =========================================================================
    // PROPOSALS
    // =========================================================================

    /// `POST /api/proposals/submit/{user_id}` — returns the stored proposal
    /// with the server-computed premium.
    ///
    /// # Errors
    ///
    /// `Server` with 400 for an unknown vehicle type or package.
    pub async fn submit_proposal(&self, user_id: Uuid, proposal: &NewProposal) -> Result<Proposal, ApiError> {
        self.json_with_body(Method::POST, &format!("/api/proposals/submit/{user_id}"), proposal)
            .await
    }

    /// `GET /api/proposals` (OFFICER+).
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn list_proposals(&self) -> Result<Vec<Proposal>, ApiError> {
        self.get_json("/api/proposals").await
    }

    /// `GET /api/proposals/user/{user_id}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn user_proposals(&self, user_id: Uuid) -> Result<Vec<Proposal>, ApiError> {
        self.get_json(&format!("/api/proposals/user/{user_id}")).await
    }

    /// `GET /api/proposals/{id}`.
    ///
    /// # Errors
    ///
    /// `Server` with 404 when the proposal does not exist.
    pub async fn get_proposal(&self, proposal_id: Uuid) -> Result<Proposal, ApiError> {
        self.get_json(&format!("/api/proposals/{proposal_id}")).await
    }

    /// `DELETE /api/proposals/{id}` — owner or ADMIN.
    ///
    /// # Errors
    ///
    /// `Server` with 404 when absent, 403 for someone else's proposal.
    pub async fn delete_proposal(&self, proposal_id: Uuid) -> Result<String, ApiError> {
        self.text(Method::DELETE, &format!("/api/proposals/{proposal_id}")).await
    }

    // =========================================================================
    // PAYMENTS + CLAIMS
    // =========================================================================

    /// `POST /api/payments/process` — pay a submitted proposal's premium.
    ///
    /// # Errors
    ///
    /// `Server` with 400 "Proposal already paid" for an ACTIVE proposal.
    pub async fn process_payment(&self, proposal_id: Uuid, method: Option<&str>) -> Result<Payment, ApiError> {
        let body = serde_json::json!({ "proposalId": proposal_id, "method": method });
        self.json_with_body(Method::POST, "/api/payments/process", &body).await
    }

    /// `GET /api/payments/user/{user_id}` — payment history.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn payment_history(&self, user_id: Uuid) -> Result<Vec<Payment>, ApiError> {
        self.get_json(&format!("/api/payments/user/{user_id}")).await
    }

    /// `POST /api/payments/claim` — file a claim against an ACTIVE proposal.
    ///
    /// # Errors
    ///
    /// `Server` with 400 "Proposal is not active" for an unpaid proposal.
    pub async fn file_claim(&self, user_id: Uuid, proposal_id: Uuid, reason: &str) -> Result<Claim, ApiError> {
        let request = self
            .http
            .post(self.url("/api/payments/claim"))
            .query(&[
                ("userId", user_id.to_string()),
                ("proposalId", proposal_id.to_string()),
                ("reason", reason.to_owned()),
            ]);
        let response = self.send(request).await?;
        let raw = response.text().await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// `GET /api/payments/claims` — the full adjudication queue (OFFICER+).
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn list_claims(&self) -> Result<Vec<Claim>, ApiError> {
        self.get_json("/api/payments/claims").await
    }

    /// `GET /api/payments/claims/user/{user_id}`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn user_claims(&self, user_id: Uuid) -> Result<Vec<Claim>, ApiError> {
        self.get_json(&format!("/api/payments/claims/user/{user_id}")).await
    }

    /// `PUT /api/payments/claim/{claim_id}/status` (OFFICER+).
    ///
    /// # Errors
    ///
    /// `Server` with 404 when the claim does not exist.
    pub async fn set_claim_status(&self, claim_id: Uuid, status: ClaimStatus) -> Result<String, ApiError> {
        let request = self
            .http
            .put(self.url(&format!("/api/payments/claim/{claim_id}/status")))
            .query(&[("status", status.as_str())]);
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }

    // =========================================================================
    // OFFICERS + DASHBOARD
    // =========================================================================

    /// `GET /api/officer` (OFFICER+).
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn list_officers(&self) -> Result<Vec<Officer>, ApiError> {
        self.get_json("/api/officer").await
    }

    /// `GET /api/officer/{id}` (OFFICER+).
    ///
    /// # Errors
    ///
    /// `Server` with 404 when the officer does not exist.
    pub async fn get_officer(&self, officer_id: Uuid) -> Result<Officer, ApiError> {
        self.get_json(&format!("/api/officer/{officer_id}")).await
    }

    /// `DELETE /api/officer/{id}` (ADMIN; not your own account).
    ///
    /// # Errors
    ///
    /// `Server` with 400 when deleting the logged-in admin's own account.
    pub async fn delete_officer(&self, officer_id: Uuid) -> Result<(), ApiError> {
        self.text(Method::DELETE, &format!("/api/officer/{officer_id}")).await?;
        Ok(())
    }

    /// `GET /api/dashboard/stats` (OFFICER+).
    ///
    /// # Errors
    ///
    /// `Unauthorized` or `Server` per the server's access rules.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/api/dashboard/stats").await
    }
}

// =============================================================================
// CLIENT-SIDE AGGREGATION
// =============================================================================

/// Aggregation of one user's proposals for the policyholder dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicySummary {
    pub total_policies: usize,
    pub active_policies: usize,
    pub total_premium: f64,
}

impl PolicySummary {
    /// Tally a proposal list: total count, ACTIVE count, premium sum.
    #[must_use]
    pub fn from_proposals(proposals: &[Proposal]) -> Self {
        let active_policies = proposals.iter().filter(|p| p.status == ProposalStatus::Active).count();
        let total_premium = proposals.iter().map(|p| p.premium_amount).sum();
        Self {
            total_policies: proposals.len(),
            active_policies,
            total_premium,
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
