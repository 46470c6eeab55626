//! Use-case layer: logging decorators around the domain operations.
//!
//! Transparent to failure propagation — errors pass through unchanged after
//! an error-level entry; successes get a debug-level summary. The request id
//! reaches these entries through the request span set by the middleware.

pub mod calculator;
pub mod greeting;
