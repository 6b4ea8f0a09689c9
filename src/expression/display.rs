use std::fmt;

use crate::expression::ast::Expression;
use crate::operations::PrettyPrinter;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&PrettyPrinter::render(self))
    }
}
