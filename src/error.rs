use thiserror::Error;

/// Reasons a structured OBB description is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid OBB: description is not an object")]
    NotAnObject,
    #[error("invalid OBB: missing '{0}' entry")]
    MissingField(&'static str),
    #[error("invalid OBB: '{0}' is not an array")]
    NotAnArray(&'static str),
    #[error("invalid OBB: '{field}' has {found} values, expected {expected}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid OBB: '{field}[{index}]' is not numeric")]
    NotNumeric { field: &'static str, index: usize },
    #[error("invalid OBB: found invalid key '{0}'")]
    UnknownField(String),
    /// All four quaternion components are zero, so there is no rotation to
    /// normalize to.
    #[error("invalid OBB: 'quaternion' has zero length")]
    DegenerateQuaternion,
    #[error("invalid OBB: {0}")]
    Json(String),
}

impl ValidationError {
    /// The description field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field) | Self::NotAnArray(field) => Some(*field),
            Self::WrongLength { field, .. } | Self::NotNumeric { field, .. } => Some(*field),
            Self::UnknownField(field) => Some(field.as_str()),
            Self::DegenerateQuaternion => Some("quaternion"),
            Self::NotAnObject | Self::Json(_) => None,
        }
    }
}
