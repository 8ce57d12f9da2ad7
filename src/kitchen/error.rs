//! Engine error types

use thiserror::Error;

use super::units::UnitCategory;

/// Recoverable calculation errors.
///
/// None of these are fatal: the caller leaves the dependent display blank.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KitchenError {
    #[error("Unknown {category} unit: '{unit}'")]
    UnknownUnit { unit: String, category: UnitCategory },

    #[error("Unknown ingredient: '{name}'")]
    UnknownIngredient { name: String },

    #[error("Scale factor is undefined: {0}")]
    UndefinedScale(&'static str),

    #[error("Unknown recipe template: '{id}'")]
    UnknownTemplate { id: String },
}

impl KitchenError {
    pub(crate) fn unknown_unit(unit: &str, category: UnitCategory) -> Self {
        KitchenError::UnknownUnit {
            unit: unit.to_string(),
            category,
        }
    }
}

/// Result type for engine operations
pub type KitchenResult<T> = Result<T, KitchenError>;
