/// Core evaluation logic and context.
///
/// Contains the evaluation `Context` with its bounds, the tree walk, and the
/// literal range check.
pub mod core;

/// Binary operator evaluation.
///
/// Implements addition, subtraction, multiplication and division with
/// explicit overflow, underflow and division-by-zero checks.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;
