//! Errors at the field-editing boundary.
//!
//! The calculator itself is total and has no error type.

/// Errors returned when addressing a field by name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    /// No input or formula field has this name.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}
