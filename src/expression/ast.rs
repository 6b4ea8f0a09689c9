/// A node of a parsed arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(Constant),
    Operator(Operator),
}

/// Leaf node holding a single numeric value
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    value: f64,
}

/// Binary node owning its two operands
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    symbol: char,
    left: Box<Expression>,
    right: Box<Expression>,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Operator {
    /// The symbol is not checked here; traversals reject anything outside
    /// `+ - * / ^` when they reach it.
    pub fn new(symbol: char, left: Expression, right: Expression) -> Self {
        Self {
            symbol,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Expression {
    pub fn constant(value: f64) -> Self {
        Expression::Constant(Constant::new(value))
    }

    pub fn operator(symbol: char, left: Expression, right: Expression) -> Self {
        Expression::Operator(Operator::new(symbol, left, right))
    }
}

impl From<Constant> for Expression {
    fn from(constant: Constant) -> Self {
        Expression::Constant(constant)
    }
}

impl From<Operator> for Expression {
    fn from(operator: Operator) -> Self {
        Expression::Operator(operator)
    }
}
