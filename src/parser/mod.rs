mod core;
mod errors;

pub use core::parse;
pub use errors::ParseError;
