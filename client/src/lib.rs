//! Typed SDK for the autosure insurance server.
//!
//! This crate owns the wire types shared with `server` and wraps the HTTP API
//! behind [`ApiClient`]. Login state persists on disk through [`Session`] so
//! short-lived processes (the `cli` binary, scripts) can reuse one token until
//! it expires.

pub mod api;
pub mod session;
pub mod types;

pub use api::{ApiClient, ApiError, PolicySummary};
pub use session::{Session, SessionError};
pub use types::{
    Claim, ClaimStatus, DashboardStats, LoginRequest, NewOfficer, NewProposal, NewUser, Officer, Payment, Proposal,
    ProposalStatus, Role, TokenResponse, UpdateUser, User,
};
