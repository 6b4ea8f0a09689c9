use log::{debug, error};

use crate::expression::{Constant, Expression, Operator, Visitor};
use crate::operations::errors::EvaluationError;

/// Computes the numeric value of a tree.
///
/// Division follows IEEE 754, so `8/0` yields positive infinity rather
/// than an error.
#[derive(Debug, Default)]
pub struct Evaluator {
    result: f64,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the most recently visited tree
    pub fn result(&self) -> f64 {
        self.result
    }

    /// # Errors
    ///
    /// Returns an error if the tree holds an operator symbol outside
    /// `+ - * / ^`, which only a hand-built tree can contain.
    pub fn evaluate(expr: &Expression) -> Result<f64, EvaluationError> {
        let mut evaluator = Self::new();
        expr.accept(&mut evaluator)?;
        debug!("Expression evaluated to: {}", evaluator.result);
        Ok(evaluator.result)
    }
}

impl Visitor for Evaluator {
    type Error = EvaluationError;

    fn visit_constant(&mut self, constant: &Constant) -> Result<(), Self::Error> {
        self.result = constant.value();
        Ok(())
    }

    fn visit_operator(&mut self, operator: &Operator) -> Result<(), Self::Error> {
        operator.left().accept(self)?;
        let left = self.result;

        operator.right().accept(self)?;
        let right = self.result;

        self.result = match operator.symbol() {
            '+' => left + right,
            '-' => left - right,
            '*' => left * right,
            '/' => {
                if right == 0.0 {
                    debug!("Division by zero: {} / {}", left, right);
                }
                left / right
            }
            '^' => left.powf(right),
            other => {
                error!("Unknown operator '{}' in expression tree", other);
                return Err(EvaluationError::UnknownOperator(other));
            }
        };
        Ok(())
    }
}
