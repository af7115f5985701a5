pub mod core;
/// Simple builtin implementations.
///
/// Contains `pow`, `rand`, and the shared helper behind the 64-bit float
/// unary functions (`sin`, `cos`, `tan`, `log`, `exp`).
pub mod builtin;
/// The `sqrt` (square root) function implementation.
///
/// Computes the square root at the precision of the active mode.
pub mod sqrt;
/// The `complex`, `re` and `im` function implementations.
///
/// Constructs values carrying an imaginary component and projects the
/// components back out.
pub mod complex;
/// The `string` hash function implementation.
///
/// Folds a string argument into a numeric value with a 31-multiplier
/// rolling hash.
pub mod hash;
