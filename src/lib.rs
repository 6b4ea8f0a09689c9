//! Infixtree - parse flat infix arithmetic into a tree and walk it
//!
//! Input such as `3+4*2` is split by operator precedence into a tree of
//! [`Constant`] and [`Operator`] nodes. Operations over the tree are
//! [`Visitor`] implementations: each node accepts a visitor and calls the
//! handler for its own variant, so new traversals can be written without
//! touching the node types.

pub mod errors;
pub mod expression;
pub mod operations;
pub mod parser;

// Re-export the main public API
pub use errors::Error;
pub use expression::{Constant, Expression, Operator, Visitor};
pub use operations::{EvaluationError, Evaluator, LatexPrinter, PrettyPrinter};
pub use parser::{ParseError, parse};

/// Both results of walking one parsed expression
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub value: f64,
    pub pretty: String,
}

/// Parse `text` and compute its numeric value
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty or not a well-formed flat infix expression
///
/// # Examples
///
/// ```
/// use infixtree::evaluate_str;
///
/// assert_eq!(evaluate_str("3+4*2"), Ok(11.0));
/// assert!(evaluate_str("5+").is_err());
/// ```
pub fn evaluate_str(text: &str) -> Result<f64, Error> {
    let expr = parse(text)?;
    Ok(Evaluator::evaluate(&expr)?)
}

/// Parse `text` and render it fully parenthesized
///
/// # Errors
///
/// Returns an error if the input does not parse.
///
/// # Examples
///
/// ```
/// use infixtree::pretty_print_str;
///
/// assert_eq!(pretty_print_str("3+4*2").as_deref(), Ok("((3)+((4)*(2)))"));
/// ```
pub fn pretty_print_str(text: &str) -> Result<String, Error> {
    let expr = parse(text)?;
    Ok(PrettyPrinter::render(&expr))
}

/// Parse `text` once and run both built-in traversals over the tree
///
/// # Errors
///
/// Returns an error if the input does not parse or the tree cannot be
/// evaluated.
pub fn analyze(text: &str) -> Result<Analysis, Error> {
    let expr = parse(text)?;
    let value = Evaluator::evaluate(&expr)?;
    let pretty = PrettyPrinter::render(&expr);
    Ok(Analysis { value, pretty })
}
