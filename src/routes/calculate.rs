//! Calculation endpoint.

use axum::extract::Query;
use serde::Deserialize;

use crate::error::ApiError;
use crate::logging::log_error;
use crate::usecase;

/// Raw query parameters. Missing values default to empty strings so a
/// missing numeric parameter produces the same fixed message as an
/// unparseable one.
#[derive(Debug, Deserialize)]
pub struct CalculateParams {
    #[serde(default)]
    num1: String,
    #[serde(default)]
    num2: String,
    #[serde(default)]
    op: String,
}

/// Handles `GET /calculate?num1=&num2=&op=`.
///
/// Responds 200 with the result formatted to two decimal places, or 400
/// with the error message. Every rejection is logged before responding.
pub async fn calculate(Query(params): Query<CalculateParams>) -> Result<String, ApiError> {
    let num1: f64 = params.num1.parse().map_err(|err| {
        log_error("calculate_handler", &err, "invalid num1 parameter");
        ApiError::BadRequest("invalid num1 parameter".to_string())
    })?;

    let num2: f64 = params.num2.parse().map_err(|err| {
        log_error("calculate_handler", &err, "invalid num2 parameter");
        ApiError::BadRequest("invalid num2 parameter".to_string())
    })?;

    let result = usecase::calculator::calculate(num1, num2, &params.op).map_err(|err| {
        log_error("calculate_handler", &err, "calculation error");
        ApiError::BadRequest(err.to_string())
    })?;

    Ok(format!("{result:.2}"))
}
