/// Adds two numbers.
///
/// # Example
/// ```
/// assert_eq!(treemath::interpreter::evaluator::arith::add(2.0, 3.0), 5.0);
/// ```
#[must_use]
pub fn add(augend: f64, addend: f64) -> f64 {
    augend + addend
}

/// Subtracts the second number from the first.
#[must_use]
pub fn subtract(minuend: f64, subtrahend: f64) -> f64 {
    minuend - subtrahend
}

/// Multiplies two numbers.
#[must_use]
pub fn multiply(multiplicand: f64, multiplier: f64) -> f64 {
    multiplicand * multiplier
}

/// Divides the first number by the second.
///
/// Division by zero follows IEEE-754: the result is an infinity, or NaN
/// for `0/0`. It is never an error.
///
/// # Example
/// ```
/// assert!(treemath::interpreter::evaluator::arith::divide(1.0, 0.0).is_infinite());
/// ```
#[must_use]
pub fn divide(dividend: f64, divisor: f64) -> f64 {
    dividend / divisor
}

/// Raises the base to the given exponent.
///
/// # Example
/// ```
/// assert_eq!(treemath::interpreter::evaluator::arith::exponentiate(2.0, 10.0),
///            1024.0);
/// ```
#[must_use]
pub fn exponentiate(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
