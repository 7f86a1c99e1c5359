/// Array storage.
///
/// Defines [`array::Array`], the shared, grow-on-write sequence behind array
/// values, and the length limit applied when arrays are created or grown.
pub mod array;

/// The runtime value type.
///
/// Defines [`core::Value`], its type names, truthiness and printed form.
pub mod core;
