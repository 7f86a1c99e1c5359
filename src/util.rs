/// Numeric conversion helpers.
///
/// Conversions between `i64`, `usize` and `f64` used when integers become
/// array indices or are promoted to reals. Fallible conversions return a
/// `Result` carrying the caller's error.
pub mod num;
