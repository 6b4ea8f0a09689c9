use std::convert::Infallible;

use crate::expression::{Constant, Expression, Operator, Visitor};

/// Renders a tree with every node, leaves included, wrapped in parentheses.
///
/// Constants use the `f64` `Display` rule, so `4.0` prints as `4`.
#[derive(Debug, Default)]
pub struct PrettyPrinter {
    output: String,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendering of the most recently visited tree
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn render(expr: &Expression) -> String {
        let mut printer = Self::new();
        match expr.accept(&mut printer) {
            Ok(()) => printer.output,
            Err(never) => match never {},
        }
    }
}

impl Visitor for PrettyPrinter {
    type Error = Infallible;

    fn visit_constant(&mut self, constant: &Constant) -> Result<(), Self::Error> {
        self.output = format!("({})", constant.value());
        Ok(())
    }

    fn visit_operator(&mut self, operator: &Operator) -> Result<(), Self::Error> {
        operator.left().accept(self)?;
        let left = std::mem::take(&mut self.output);

        operator.right().accept(self)?;
        let right = std::mem::take(&mut self.output);

        self.output = format!("({}{}{})", left, operator.symbol(), right);
        Ok(())
    }
}
