use thiserror::Error;

use crate::operations::EvaluationError;
use crate::parser::ParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    EvaluationError(#[from] EvaluationError),
}
