//! Error types for scene edits and configuration.
//!
//! Every failure in this crate is an input-validation failure. Nothing here
//! does I/O, so callers handle these locally: a rejected edit leaves the
//! object in its last valid state.

use crate::panel::Field;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("unknown camera type: {0:?}")]
    UnknownCameraType(String),
    #[error("invalid number for {field:?}: {raw:?}")]
    InvalidNumber { field: Field, raw: String },
    #[error("size for {field:?} must be at least {min}, got {value}")]
    SizeTooSmall { field: Field, value: f64, min: f64 },
    #[error("no object selected")]
    NothingSelected,
    #[error("the primary rectangle cannot be deleted")]
    PrimaryRectangleProtected,
    #[error("field {0:?} does not apply to the selected object")]
    FieldMismatch(Field),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
