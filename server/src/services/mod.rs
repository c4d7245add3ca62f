//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and persistence concerns so route
//! handlers can stay focused on request decoding and auth plumbing.
//! Policyholders (`user`) and staff (`officer`) are separate tables with
//! separate services; `auth` ties them together for registration and login.

pub mod auth;
pub mod claim;
pub mod officer;
pub mod password;
pub mod payment;
pub mod proposal;
pub mod seed;
pub mod token;
pub mod user;
