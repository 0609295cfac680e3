//! HTTP handlers grouped by resource.
//!
//! Every handler carries a `utoipa::path` annotation; the router collects them into the
//! OpenAPI document served under `/swagger-ui`.

pub mod auth;
pub mod countdown;
pub mod filter;
pub mod guild;
pub mod settings;
pub mod webhook;
