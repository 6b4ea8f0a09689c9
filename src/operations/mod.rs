//! Traversals over the expression tree

mod errors;
mod evaluate;
mod latex;
mod pretty;

pub use errors::EvaluationError;
pub use evaluate::Evaluator;
pub use latex::LatexPrinter;
pub use pretty::PrettyPrinter;
