//! Two-operand arithmetic

use crate::error::{Result, ToolbeltError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }

    /// Apply the operation. Division by zero and non-finite operands are
    /// rejected rather than producing infinities or NaN.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64> {
        if !a.is_finite() || !b.is_finite() {
            return Err(ToolbeltError::InvalidInput(
                "operands must be finite numbers".to_string(),
            ));
        }

        let value = match self {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => {
                if b == 0.0 {
                    return Err(ToolbeltError::InvalidInput(
                        "division by zero".to_string(),
                    ));
                }
                a / b
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ToolbeltError::InvalidInput(format!(
                "result of {} {} {} overflows",
                a,
                self.symbol(),
                b
            )))
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        };
        f.write_str(name)
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" | "addition" | "+" => Ok(Operation::Addition),
            "sub" | "subtract" | "subtraction" | "-" => Ok(Operation::Subtraction),
            "mul" | "multiply" | "multiplication" | "x" | "*" => Ok(Operation::Multiplication),
            "div" | "divide" | "division" | "/" => Ok(Operation::Division),
            _ => Err(format!(
                "Invalid operation: '{}'. Valid operations are: add, sub, mul, div",
                s
            )),
        }
    }
}
