//! # API crate: typed client for the Dolet admin backend
//!
//! Every view in the console talks to the backend through [`ApiClient`]. The
//! backend owns all records and business rules; this crate only knows how to
//! reach its endpoints, decode the `{ success, message, ... }` envelope, and
//! present the records it returns.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], bearer-token requests and envelope decoding |
//! | [`config`] | Base URL resolution (`ADMIN_API_BASE_URL`) |
//! | [`error`] | [`ApiError`] and the crate [`Result`] alias |
//! | [`models`] | JSON records: helpers, helpseekers, blocks, reports, tickets, analytics |
//! | [`search`] | Client-side substring filtering used by the list views |
//! | [`format`] | Dates, money, durations and bar widths as the views display them |
//! | [`forms`] | Required-field checks run before a form is submitted |
//!
//! Endpoint methods live in private `endpoints/*` files, one per backend area,
//! each adding an `impl ApiClient` block.

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod search;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use models::*;
