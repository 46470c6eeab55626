//! Arithmetic over two operands with a closed operation set.

/// Error cases for [`calculate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Operation tag outside {add, sub, mult, div}.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

/// Applies `op` to the operands.
pub fn calculate(num1: f64, num2: f64, op: &str) -> Result<f64, CalcError> {
    match op {
        "add" => Ok(num1 + num2),
        "sub" => Ok(num1 - num2),
        "mult" => Ok(num1 * num2),
        "div" => {
            if num2 == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(num1 / num2)
        }
        _ => Err(CalcError::InvalidOperation(op.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_mult_return_exact_results() {
        assert_eq!(calculate(3.0, 4.0, "add"), Ok(7.0));
        assert_eq!(calculate(3.0, 4.0, "sub"), Ok(-1.0));
        assert_eq!(calculate(3.0, 4.0, "mult"), Ok(12.0));
    }

    #[test]
    fn div_with_nonzero_divisor() {
        assert_eq!(calculate(9.0, 3.0, "div"), Ok(3.0));
        assert_eq!(calculate(5.0, 2.0, "div"), Ok(2.5));
    }

    #[test]
    fn div_by_zero_rejected() {
        assert_eq!(calculate(5.0, 0.0, "div"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn unknown_op_rejected() {
        assert_eq!(
            calculate(1.0, 2.0, "pow"),
            Err(CalcError::InvalidOperation("pow".to_string()))
        );
        assert_eq!(
            calculate(1.0, 2.0, ""),
            Err(CalcError::InvalidOperation(String::new()))
        );
    }

    #[test]
    fn error_messages_match_wire_format() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalcError::InvalidOperation("pow".to_string()).to_string(),
            "invalid operation: pow"
        );
    }
}
