/// The runtime value type.
///
/// Defines `Value`, which is either a scalar `f64` or a shared array of
/// values. Arrays nest to represent matrices and higher structures.
pub mod core;
/// Canonical text rendering of values.
///
/// Formats scalars without floating-point noise or scientific notation and
/// renders arrays as bracketed, comma-separated lists.
pub mod format;

pub use self::core::Value;
