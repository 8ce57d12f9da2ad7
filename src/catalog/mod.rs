//! Measurement catalog
//!
//! The immutable set of conversion tables, ingredient weights and recipe
//! templates. Built once at startup and shared by reference.

mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::kitchen::{
    same_symbol, ConversionTable, IngredientWeightTable, KitchenError, KitchenResult,
    TemperatureUnit, UnitCategory,
};
use crate::models::{FeaturedRecipe, RecipeTemplate};

/// Environment variable naming an optional JSON catalog override file
pub const CATALOG_PATH_ENV: &str = "KITCHEN_CATALOG_PATH";

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Partial catalog read from an override file. Absent keys keep built-ins.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogOverrides {
    volume: Option<ConversionTable>,
    weight: Option<ConversionTable>,
    ingredient_weights: Option<IngredientWeightTable>,
    templates: Option<Vec<RecipeTemplate>>,
    featured: Option<Vec<FeaturedRecipe>>,
}

/// All static measurement data
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    volume: ConversionTable,
    weight: ConversionTable,
    ingredient_weights: IngredientWeightTable,
    templates: Vec<RecipeTemplate>,
    featured: Vec<FeaturedRecipe>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in kitchen catalog
    pub fn builtin() -> Self {
        Self {
            volume: ConversionTable::volume(),
            weight: ConversionTable::weight(),
            ingredient_weights: IngredientWeightTable::builtin(),
            templates: defaults::templates(),
            featured: defaults::featured(),
        }
    }

    /// Load the built-in catalog with overrides from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        tracing::info!(
            "Loaded catalog overrides from {} ({} templates)",
            path.display(),
            catalog.templates.len()
        );
        Ok(catalog)
    }

    /// Parse overrides from JSON text and merge them over the built-ins
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        let overrides: CatalogOverrides = serde_json::from_str(text)?;
        let builtin = Self::builtin();
        let catalog = Self {
            volume: overrides.volume.unwrap_or(builtin.volume),
            weight: overrides.weight.unwrap_or(builtin.weight),
            ingredient_weights: overrides
                .ingredient_weights
                .unwrap_or(builtin.ingredient_weights),
            templates: overrides.templates.unwrap_or(builtin.templates),
            featured: overrides.featured.unwrap_or(builtin.featured),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Use `KITCHEN_CATALOG_PATH` if set, otherwise the built-in catalog
    pub fn from_env() -> CatalogResult<Self> {
        match std::env::var(CATALOG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => Ok(Self::builtin()),
        }
    }

    /// Check every table and template invariant
    pub fn validate(&self) -> CatalogResult<()> {
        self.volume
            .validate(UnitCategory::Volume)
            .map_err(CatalogError::Invalid)?;
        self.weight
            .validate(UnitCategory::Weight)
            .map_err(CatalogError::Invalid)?;

        // A symbol means one thing only
        for symbol in self.volume.symbols() {
            if self.weight.contains(symbol) || TemperatureUnit::from_symbol(symbol).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "unit '{}' is used in more than one category",
                    symbol
                )));
            }
        }
        for symbol in self.weight.symbols() {
            if TemperatureUnit::from_symbol(symbol).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "unit '{}' is used in more than one category",
                    symbol
                )));
            }
        }

        self.ingredient_weights
            .validate()
            .map_err(CatalogError::Invalid)?;

        for (i, template) in self.templates.iter().enumerate() {
            if template.id.trim().is_empty() {
                return Err(CatalogError::Invalid("template with empty id".to_string()));
            }
            if self.templates[..i].iter().any(|t| t.id == template.id) {
                return Err(CatalogError::Invalid(format!(
                    "template id '{}' is used more than once",
                    template.id
                )));
            }
            if template.base_servings == 0 {
                return Err(CatalogError::Invalid(format!(
                    "template '{}' must have base_servings > 0",
                    template.id
                )));
            }
        }

        Ok(())
    }

    pub fn volume(&self) -> &ConversionTable {
        &self.volume
    }

    pub fn weight(&self) -> &ConversionTable {
        &self.weight
    }

    /// Linear table for a category (None for temperature)
    pub fn linear_table(&self, category: UnitCategory) -> Option<&ConversionTable> {
        match category {
            UnitCategory::Volume => Some(&self.volume),
            UnitCategory::Weight => Some(&self.weight),
            UnitCategory::Temperature => None,
        }
    }

    /// Unit symbols of a category, in display order
    pub fn units(&self, category: UnitCategory) -> Vec<&str> {
        match self.linear_table(category) {
            Some(table) => table.symbols().collect(),
            None => TemperatureUnit::ALL.iter().map(|u| u.symbol()).collect(),
        }
    }

    /// Catalog spelling of a unit symbol, if it belongs to the category
    pub fn canonical_unit(&self, category: UnitCategory, symbol: &str) -> Option<&str> {
        self.units(category)
            .into_iter()
            .find(|u| same_symbol(u, symbol))
    }

    /// Whether a symbol belongs to a category
    pub fn has_unit(&self, category: UnitCategory, symbol: &str) -> bool {
        self.canonical_unit(category, symbol).is_some()
    }

    pub fn ingredient_weights(&self) -> &IngredientWeightTable {
        &self.ingredient_weights
    }

    pub fn templates(&self) -> &[RecipeTemplate] {
        &self.templates
    }

    pub fn template(&self, id: &str) -> KitchenResult<&RecipeTemplate> {
        let wanted = id.trim();
        self.templates
            .iter()
            .find(|t| t.id == wanted)
            .ok_or_else(|| KitchenError::UnknownTemplate {
                id: wanted.to_string(),
            })
    }

    pub fn featured(&self) -> &[FeaturedRecipe] {
        &self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn test_builtin_units() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.units(UnitCategory::Volume),
            vec!["tsp", "tbsp", "fl oz", "cup", "pint", "quart", "gallon", "ml", "liter"]
        );
        assert_eq!(catalog.units(UnitCategory::Weight), vec!["oz", "lb", "g", "kg"]);
        assert_eq!(catalog.units(UnitCategory::Temperature), vec!["F", "C", "K"]);
    }

    #[test]
    fn test_has_unit_respects_category() {
        let catalog = Catalog::builtin();
        assert!(catalog.has_unit(UnitCategory::Volume, "cup"));
        assert!(!catalog.has_unit(UnitCategory::Weight, "cup"));
        assert!(catalog.has_unit(UnitCategory::Temperature, "k"));
    }

    #[test]
    fn test_canonical_unit_spelling() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.canonical_unit(UnitCategory::Volume, " FL OZ "), Some("fl oz"));
        assert_eq!(catalog.canonical_unit(UnitCategory::Temperature, "k"), Some("K"));
        assert_eq!(catalog.canonical_unit(UnitCategory::Weight, "cup"), None);
    }

    #[test]
    fn test_template_lookup() {
        let catalog = Catalog::builtin();
        let cookies = catalog.template("cookies").unwrap();
        assert_eq!(cookies.name, "Cozy Cookies");
        assert_eq!(cookies.base_servings, 24);
        assert_eq!(cookies.ingredients.len(), 6);
        assert_eq!(cookies.ingredients[0].name, "Butter");

        assert_eq!(
            catalog.template("pie"),
            Err(KitchenError::UnknownTemplate { id: "pie".to_string() })
        );
    }

    #[test]
    fn test_from_json_overrides_only_given_keys() {
        let catalog = Catalog::from_json(r#"{"ingredient_weights": {"oats": 80}}"#).unwrap();
        assert_eq!(catalog.ingredient_weights().grams_per_cup("oats"), Some(80.0));
        assert_eq!(catalog.ingredient_weights().grams_per_cup("flour"), None);
        assert_eq!(catalog.templates().len(), 3);
        assert_eq!(catalog.volume(), &ConversionTable::volume());
    }

    #[test]
    fn test_from_json_rejects_invalid_tables() {
        let missing_base = r#"{"weight": [{"symbol": "oz", "factor": 28.3495}]}"#;
        assert!(matches!(
            Catalog::from_json(missing_base),
            Err(CatalogError::Invalid(_))
        ));

        let shared_symbol = r#"{"weight": [{"symbol": "g", "factor": 1}, {"symbol": "cup", "factor": 120}]}"#;
        assert!(matches!(
            Catalog::from_json(shared_symbol),
            Err(CatalogError::Invalid(_))
        ));

        let temperature_clash = r#"{"volume": [{"symbol": "ml", "factor": 1}, {"symbol": "C", "factor": 240}]}"#;
        assert!(matches!(
            Catalog::from_json(temperature_clash),
            Err(CatalogError::Invalid(_))
        ));

        let zero_servings = r#"{"templates": [{"id": "x", "name": "X", "base_servings": 0, "ingredients": []}]}"#;
        assert!(matches!(
            Catalog::from_json(zero_servings),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
        assert!(matches!(
            Catalog::from_json(r#"{"colors": []}"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/catalog.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
