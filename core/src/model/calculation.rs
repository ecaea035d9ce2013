use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Accepts exactly the four arithmetic symbols. The numeric submenu
    /// indices (1-4) are mapped to symbols at the input layer.
    pub fn from_symbol(s: &str) -> Result<Self> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(anyhow!("Unknown operation: '{}'", other)),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One performed calculation. Immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Calculation {
    pub id: Uuid,
    pub performed_at: DateTime<Utc>,
    pub operand1: f64,
    pub operand2: f64,
    pub operator: Operator,
    pub result: f64,
}

impl Calculation {
    pub fn new(operand1: f64, operand2: f64, operator: Operator, result: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            performed_at: Utc::now(),
            operand1,
            operand2,
            operator,
            result,
        }
    }

    pub fn expression(&self) -> String {
        format!("{} {} {}", self.operand1, self.operator, self.operand2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Operator::from_symbol("+").unwrap(), Operator::Add);
        assert_eq!(Operator::from_symbol(" / ").unwrap(), Operator::Divide);
        assert!(Operator::from_symbol("%").is_err());
        assert!(Operator::from_symbol("").is_err());
    }

    #[test]
    fn test_expression() {
        let calc = Calculation::new(5.0, 3.0, Operator::Add, 8.0);
        assert_eq!(calc.expression(), "5 + 3");
    }
}
