//! Ingredient weight lookup
//!
//! Converts a cup measure of a known ingredient to grams using a fixed
//! grams-per-cup density table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{KitchenError, KitchenResult};

/// Grams per US cup of all-purpose flour
pub const G_PER_CUP_FLOUR: f64 = 120.0;
/// Grams per US cup of granulated sugar
pub const G_PER_CUP_SUGAR: f64 = 200.0;
/// Grams per US cup of butter
pub const G_PER_CUP_BUTTER: f64 = 227.0;

/// Closed mapping from ingredient name to grams per US cup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientWeightTable {
    grams_per_cup: BTreeMap<String, f64>,
}

impl IngredientWeightTable {
    pub fn new(grams_per_cup: BTreeMap<String, f64>) -> Self {
        Self { grams_per_cup }
    }

    /// Built-in densities for flour, sugar and butter
    pub fn builtin() -> Self {
        let mut grams_per_cup = BTreeMap::new();
        grams_per_cup.insert("flour".to_string(), G_PER_CUP_FLOUR);
        grams_per_cup.insert("sugar".to_string(), G_PER_CUP_SUGAR);
        grams_per_cup.insert("butter".to_string(), G_PER_CUP_BUTTER);
        Self { grams_per_cup }
    }

    /// Grams per cup for an ingredient (name matched case-insensitively)
    pub fn grams_per_cup(&self, name: &str) -> Option<f64> {
        let wanted = name.trim();
        self.grams_per_cup
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(wanted))
            .map(|(_, grams)| *grams)
    }

    /// Known ingredient names, sorted
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.grams_per_cup.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.grams_per_cup.len()
    }

    pub fn validate(&self) -> Result<(), String> {
        let names: Vec<&String> = self.grams_per_cup.keys().collect();
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err("ingredient weight table has an empty name".to_string());
            }
            if names[..i].iter().any(|n| n.eq_ignore_ascii_case(name)) {
                return Err(format!("ingredient '{}' is listed more than once", name));
            }
            let grams = self.grams_per_cup[name.as_str()];
            if !grams.is_finite() || grams <= 0.0 {
                return Err(format!(
                    "ingredient '{}' has non-positive weight {} g/cup",
                    name, grams
                ));
            }
        }
        Ok(())
    }
}

/// Convert cups of an ingredient to grams.
///
/// The result is unrounded; round only when displaying.
pub fn cups_to_grams(table: &IngredientWeightTable, ingredient: &str, cups: f64) -> KitchenResult<f64> {
    let grams_per_cup = table
        .grams_per_cup(ingredient)
        .ok_or_else(|| KitchenError::UnknownIngredient {
            name: ingredient.to_string(),
        })?;
    Ok(cups * grams_per_cup)
}
