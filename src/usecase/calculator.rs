//! Calculation use case.

use crate::domain::{self, CalcError};

/// Runs the arithmetic operation, logging the outcome.
pub fn calculate(num1: f64, num2: f64, op: &str) -> Result<f64, CalcError> {
    match domain::calculate(num1, num2, op) {
        Ok(result) => {
            let symbol = operator_symbol(op);
            tracing::debug!(
                function = "calculate",
                "performing {op}: {num1:.2} {symbol} {num2:.2} = {result:.2}",
            );
            Ok(result)
        }
        Err(err) => {
            tracing::error!(function = "calculate", error = %err, "calculation error");
            Err(err)
        }
    }
}

/// Mathematical symbol for an operation tag, for log readability.
fn operator_symbol(op: &str) -> &str {
    match op {
        "add" => "+",
        "sub" => "-",
        "mult" => "*",
        "div" => "/",
        _ => op,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_passes_through_untouched() {
        assert_eq!(calculate(3.0, 4.0, "add"), Ok(7.0));
        assert_eq!(calculate(10.0, 4.0, "div"), Ok(2.5));
    }

    #[test]
    fn errors_propagate_unchanged() {
        assert_eq!(calculate(5.0, 0.0, "div"), Err(CalcError::DivisionByZero));
        assert_eq!(
            calculate(1.0, 2.0, "pow"),
            Err(CalcError::InvalidOperation("pow".to_string()))
        );
    }

    #[test]
    fn symbols_cover_the_closed_set() {
        assert_eq!(operator_symbol("add"), "+");
        assert_eq!(operator_symbol("sub"), "-");
        assert_eq!(operator_symbol("mult"), "*");
        assert_eq!(operator_symbol("div"), "/");
        assert_eq!(operator_symbol("pow"), "pow");
    }
}
