//! One `impl ApiClient` block per backend area.

use serde::Deserialize;

mod analytics;
mod auth;
mod blocks;
mod helpers;
mod helpseekers;
mod reports;
mod support;

/// Payload nested under `data`, as the report and support routes send it.
#[derive(Deserialize)]
struct Data<T> {
    data: T,
}
