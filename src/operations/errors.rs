use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Unknown operator '{0}' in expression tree")]
    UnknownOperator(char),
}
