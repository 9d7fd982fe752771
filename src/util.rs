/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values
/// into container indices without silent wrap-around or sign surprises.
///
/// All functions return an `Option`, which is `Some` if the conversion is
/// meaningful, or `None` if the value cannot name an index.
pub mod num;
