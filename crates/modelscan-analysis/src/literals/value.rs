//! The normalized value variants.

use serde::{Serialize, Serializer};

/// Result of normalizing one argument or option expression.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    Bool(bool),
    Null,
    Int(i64),
    Float(f64),
    /// Quoted string with the quotes removed.
    Str(String),
    /// Not a recognized literal; the source text, verbatim.
    Opaque(String),
}

/// Opaque values encode as their verbatim text, the same as strings.
impl Serialize for NormalizedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_none(),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Str(s) | Self::Opaque(s) => serializer.serialize_str(s),
        }
    }
}
