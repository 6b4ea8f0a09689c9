use crate::expression::{Constant, Expression, Operator, Visitor};
use crate::operations::errors::EvaluationError;

/// Renders a tree as LaTeX.
/// - Uses \cdot for multiplication
/// - Uses \frac for division
/// - Keeps the tree's grouping explicit with \left( \right) around sums,
///   differences and products
#[derive(Debug, Default)]
pub struct LatexPrinter {
    output: String,
}

impl LatexPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// # Errors
    ///
    /// Returns an error if the tree holds an operator symbol outside
    /// `+ - * / ^`.
    pub fn render(expr: &Expression) -> Result<String, EvaluationError> {
        let mut printer = Self::new();
        expr.accept(&mut printer)?;
        Ok(printer.output)
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_infinite() {
        if n.is_sign_positive() {
            String::from("\\infty")
        } else {
            String::from("-\\infty")
        }
    } else if n.is_nan() {
        String::from("\\mathrm{NaN}")
    } else {
        format!("{}", n)
    }
}

impl Visitor for LatexPrinter {
    type Error = EvaluationError;

    fn visit_constant(&mut self, constant: &Constant) -> Result<(), Self::Error> {
        self.output = number_to_string(constant.value());
        Ok(())
    }

    fn visit_operator(&mut self, operator: &Operator) -> Result<(), Self::Error> {
        operator.left().accept(self)?;
        let left = std::mem::take(&mut self.output);

        operator.right().accept(self)?;
        let right = std::mem::take(&mut self.output);

        self.output = match operator.symbol() {
            '+' => format!("\\left({} + {}\\right)", left, right),
            '-' => format!("\\left({} - {}\\right)", left, right),
            '*' => format!("\\left({} \\cdot {}\\right)", left, right),
            '/' => format!("\\frac{{{}}}{{{}}}", left, right),
            '^' => format!("{{{}}}^{{{}}}", left, right),
            other => return Err(EvaluationError::UnknownOperator(other)),
        };
        Ok(())
    }
}
