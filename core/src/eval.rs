use crate::model::calculation::Operator;
use anyhow::{anyhow, Result};

/// Checks the operands before evaluation. A zero divisor is a validation
/// failure, not a runtime fault: the calculation must be refused and
/// nothing recorded.
pub fn validate(_operand1: f64, operand2: f64, operator: Operator) -> Result<()> {
    if operator == Operator::Divide && operand2 == 0.0 {
        return Err(anyhow!("Division by zero is not allowed!"));
    }
    Ok(())
}

/// Standard IEEE-754 double-precision arithmetic. No side effects.
pub fn evaluate(operand1: f64, operand2: f64, operator: Operator) -> Result<f64> {
    validate(operand1, operand2, operator)?;

    let result = match operator {
        Operator::Add => operand1 + operand2,
        Operator::Subtract => operand1 - operand2,
        Operator::Multiply => operand1 * operand2,
        Operator::Divide => operand1 / operand2,
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_four_operators() {
        assert_close(evaluate(5.0, 3.0, Operator::Add).unwrap(), 8.0);
        assert_close(evaluate(5.0, 3.0, Operator::Subtract).unwrap(), 2.0);
        assert_close(evaluate(4.0, 4.0, Operator::Multiply).unwrap(), 16.0);
        assert_close(evaluate(10.0, 2.0, Operator::Divide).unwrap(), 5.0);
    }

    #[test]
    fn test_fractional_operands() {
        assert_close(evaluate(0.1, 0.2, Operator::Add).unwrap(), 0.3);
        assert_close(evaluate(-2.5, 4.0, Operator::Multiply).unwrap(), -10.0);
    }

    #[test]
    fn test_division_by_zero_is_rejected_before_evaluation() {
        assert!(validate(10.0, 0.0, Operator::Divide).is_err());
        assert!(evaluate(10.0, 0.0, Operator::Divide).is_err());
    }

    #[test]
    fn test_zero_second_operand_is_fine_for_other_operators() {
        assert_close(evaluate(10.0, 0.0, Operator::Add).unwrap(), 10.0);
        assert_close(evaluate(10.0, 0.0, Operator::Multiply).unwrap(), 0.0);
    }
}
