/// Core value representation.
///
/// Defines the `Value` enum distinguishing numeric from string results, and
/// the accessors used throughout evaluation.
pub mod core;

/// Numeric payload support.
///
/// Defines the `Number` type carrying an arbitrary-precision decimal real
/// component, an optional imaginary component, and the integer-literal
/// flag. Includes mode-dependent literal parsing and the bridging between
/// decimals and 64-bit floats.
pub mod number;
