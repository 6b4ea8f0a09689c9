use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression cannot be empty")]
    EmptyInput,
    #[error("Missing operand at position {position}")]
    EmptyOperand { position: usize },
    #[error("Invalid number literal '{literal}' at position {position}")]
    InvalidLiteral { literal: String, position: usize },
}
