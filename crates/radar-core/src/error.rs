// File: crates/radar-core/src/error.rs
// Summary: Error type for metric construction and rendering preconditions.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RadarError {
    /// A radar chart needs at least one axis.
    #[error("cannot render a radar chart with no categories")]
    NoCategories,

    #[error("category name must not be empty")]
    EmptyCategory,

    #[error("duplicate category `{0}`")]
    DuplicateCategory(String),

    #[error("invalid render options: {0}")]
    InvalidOptions(&'static str),
}

pub type Result<T> = std::result::Result<T, RadarError>;
