//! Recipe template model
//!
//! Static recipe templates with ingredient amounts in both unit systems, and
//! the scaled view produced from them.

use serde::{Deserialize, Serialize};

/// Which stored amount/unit pair of an ingredient to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// US customary (cups, tbsp, tsp)
    #[default]
    Us,
    /// Metric (g, ml)
    Metric,
}

impl UnitSystem {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "us" => Some(UnitSystem::Us),
            "metric" => Some(UnitSystem::Metric),
            _ => None,
        }
    }
}

/// An ingredient line in a recipe template.
///
/// Both amounts describe the same physical quantity; this is a data-entry
/// rule for catalog maintainers and is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub us_amount: f64,
    pub us_unit: String,
    pub metric_amount: f64,
    pub metric_unit: String,
}

impl Ingredient {
    pub fn new(
        name: &str,
        us_amount: f64,
        us_unit: &str,
        metric_amount: f64,
        metric_unit: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            us_amount,
            us_unit: us_unit.to_string(),
            metric_amount,
            metric_unit: metric_unit.to_string(),
        }
    }

    /// Amount and unit for the given unit system
    pub fn measure(&self, system: UnitSystem) -> (f64, &str) {
        match system {
            UnitSystem::Us => (self.us_amount, &self.us_unit),
            UnitSystem::Metric => (self.metric_amount, &self.metric_unit),
        }
    }
}

/// A recipe template from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeTemplate {
    pub id: String,
    pub name: String,
    pub base_servings: u32,
    /// Presentation order matters
    pub ingredients: Vec<Ingredient>,
}

/// An ingredient after scaling, amount rounded to hundredths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// A recipe template scaled to a new number of servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRecipe {
    pub template_id: String,
    pub name: String,
    pub unit_system: UnitSystem,
    pub original_servings: f64,
    pub desired_servings: f64,
    pub factor: f64,
    pub ingredients: Vec<ScaledIngredient>,
}
