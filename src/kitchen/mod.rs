//! Measurement engine
//!
//! Pure conversion, scaling and ingredient-weight calculations over the
//! immutable catalog tables.

pub mod converter;
pub mod error;
pub mod format;
pub mod scaler;
pub mod units;
pub mod weights;

pub use converter::convert;
pub use error::{KitchenError, KitchenResult};
pub use format::{format_amount, format_factor, format_grams, parse_amount};
pub use scaler::scale_recipe;
pub use units::{same_symbol, ConversionTable, TemperatureUnit, UnitCategory};
pub use weights::{cups_to_grams, IngredientWeightTable};
