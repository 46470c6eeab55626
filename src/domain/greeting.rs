//! Greeting formatting.

/// Error cases for [`greet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreetError {
    /// Name must be non-empty.
    #[error("name cannot be empty")]
    EmptyName,
}

/// Formats a greeting for `name`.
pub fn greet(name: &str) -> Result<String, GreetError> {
    if name.is_empty() {
        return Err(GreetError::EmptyName);
    }
    Ok(format!("Hello, {name}!"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_embeds_name_verbatim() {
        assert_eq!(greet("Ada"), Ok("Hello, Ada!".to_string()));

        let result = greet("Grace Hopper").unwrap();
        assert!(result.contains("Grace Hopper"));
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(greet(""), Err(GreetError::EmptyName));
        assert_eq!(GreetError::EmptyName.to_string(), "name cannot be empty");
    }
}
