/// Converts an `i64` index or length to `usize`, failing for negative values
/// and for values that do not fit.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if the value is not a valid index.
///
/// ## Example
/// ```
/// use frog::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(7, "negative"), Ok(7));
/// assert_eq!(i64_to_usize_checked(-1, "negative"), Err("negative"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` in magnitude lose precision, which is what integer
/// division promoting to a real implies.
///
/// ## Example
/// ```
/// use frog::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
