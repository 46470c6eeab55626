//! Greeting endpoint.

use axum::extract::Query;
use serde::Deserialize;

use crate::error::ApiError;
use crate::logging::log_error;
use crate::usecase;

/// Raw query parameters; a missing `name` is treated as empty.
#[derive(Debug, Deserialize)]
pub struct GreetParams {
    #[serde(default)]
    name: String,
}

/// Handles `GET /greet?name=`.
pub async fn greet(Query(params): Query<GreetParams>) -> Result<String, ApiError> {
    let greeting = usecase::greeting::greet(&params.name).map_err(|err| {
        log_error("greet_handler", &err, "greeting error");
        ApiError::BadRequest(err.to_string())
    })?;

    Ok(greeting)
}
