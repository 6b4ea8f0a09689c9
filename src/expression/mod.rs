//! Expression tree and the visitor dispatch over it

mod ast;
mod display;
mod visitor;

pub use ast::{Constant, Expression, Operator};
pub use visitor::Visitor;
