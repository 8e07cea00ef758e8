/// Numeric bounds and conversion helpers.
///
/// This module holds the closed interval every value computed by the
/// calculator must stay within, and the safe conversions used to move integer
/// literals into that floating-point domain without silently wrapping.
pub mod num;
