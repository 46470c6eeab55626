//! Greeting use case.

use crate::domain::{self, GreetError};

/// Builds the greeting, logging the outcome.
pub fn greet(name: &str) -> Result<String, GreetError> {
    match domain::greet(name) {
        Ok(result) => {
            tracing::debug!(function = "greet", name, result = %result, "greeting generated");
            Ok(result)
        }
        Err(err) => {
            tracing::error!(function = "greet", error = %err, "greeting error");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_passes_through_untouched() {
        assert_eq!(greet("Ada"), Ok("Hello, Ada!".to_string()));
    }

    #[test]
    fn errors_propagate_unchanged() {
        assert_eq!(greet(""), Err(GreetError::EmptyName));
    }
}
