use crate::expression::ast::{Constant, Expression, Operator};

/// A read-only traversal over an [`Expression`] tree.
///
/// Each handler receives the node it was dispatched for. Handlers for
/// [`Operator`] walk the children themselves by calling
/// [`Expression::accept`] on [`Operator::left`] and [`Operator::right`];
/// the dispatcher never recurses on its own.
pub trait Visitor {
    type Error;

    fn visit_constant(&mut self, constant: &Constant) -> Result<(), Self::Error>;

    fn visit_operator(&mut self, operator: &Operator) -> Result<(), Self::Error>;
}

impl Expression {
    /// Route this node to the visitor handler matching its variant.
    ///
    /// # Errors
    ///
    /// Returns whatever the selected handler returns.
    pub fn accept<V>(&self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: Visitor + ?Sized,
    {
        match self {
            Expression::Constant(constant) => visitor.visit_constant(constant),
            Expression::Operator(operator) => visitor.visit_operator(operator),
        }
    }
}
