/// A node of the syntax tree built by the parser.
///
/// Every internal node exclusively owns its children through a `Box`, so the
/// tree is acyclic by construction and is dropped in one post-order pass once
/// evaluation is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer written in digits or in words.
    NumberLiteral {
        /// The value of the literal. May lie outside the evaluator's bounds;
        /// the range check happens at evaluation time.
        value: i64,
    },
    /// Arithmetic negation of the child expression.
    Negate {
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::NumberLiteral { value }
    }

    /// Wraps `expr` in a negation node.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::Negate { expr: Box::new(expr) }
    }

    /// Combines two subtrees with a binary operator.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// Renders the tree fully parenthesized, e.g. `((10 - 2) - 3)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberLiteral { value } => write!(f, "{value}"),
            Self::Negate { expr } => write!(f, "-{expr}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`, `plus`)
    Add,
    /// Subtraction (`-`, `minus`)
    Sub,
    /// Multiplication (`*`, `times`)
    Mul,
    /// Division (`/`, `divided by`)
    Div,
}

impl BinaryOperator {
    /// The operation as a verb in progressive form, used in error messages
    /// such as "overflow while adding".
    #[must_use]
    pub const fn gerund(self) -> &'static str {
        match self {
            Self::Add => "adding",
            Self::Sub => "subtracting",
            Self::Mul => "multiplying",
            Self::Div => "dividing",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
