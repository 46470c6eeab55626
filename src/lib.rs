//! Tally Server - small HTTP service with request-scoped structured logging.
//!
//! Layered design:
//! - `routes`  — HTTP transport: parameter parsing, status mapping
//! - `usecase` — logging decorators around the domain operations
//! - `domain`  — pure computation, no logging or I/O
//!
//! The `request_id` middleware binds a fresh UUID to a tracing span per
//! request, so every log entry emitted on the request path carries
//! `request_id` without manual threading.

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod request_id;
pub mod routes;
pub mod state;
pub mod usecase;

pub use routes::router;
pub use state::AppState;
