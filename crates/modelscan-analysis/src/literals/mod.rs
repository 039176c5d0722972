//! Fixed-grammar literal normalization.
//!
//! Argument and option text is turned into a typed value only when it is one
//! of a handful of literal shapes. Everything else is kept verbatim as an
//! opaque value. Nothing is ever evaluated.

pub mod normalizer;
pub mod value;

pub use normalizer::normalize_value;
pub use value::NormalizedValue;
