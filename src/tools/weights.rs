//! Ingredient weight tools

use serde::Serialize;

use crate::catalog::Catalog;
use crate::kitchen::{cups_to_grams as grams_for_cups, format_grams, parse_amount, KitchenError};

/// One ingredient with its density
#[derive(Debug, Serialize)]
pub struct WeightIngredient {
    pub name: String,
    pub grams_per_cup: f64,
}

/// Response for list_weight_ingredients
#[derive(Debug, Serialize)]
pub struct ListWeightIngredientsResponse {
    pub ingredients: Vec<WeightIngredient>,
}

/// Response for cups_to_grams
#[derive(Debug, Serialize)]
pub struct CupsToGramsResponse {
    pub ingredient: String,
    pub cups: Option<f64>,
    /// Unrounded grams
    pub grams: Option<f64>,
    /// Nearest whole gram, e.g. "180 g"
    pub formatted: Option<String>,
}

pub fn list_weight_ingredients(catalog: &Catalog) -> ListWeightIngredientsResponse {
    let table = catalog.ingredient_weights();
    let ingredients = table
        .ingredients()
        .filter_map(|name| {
            table.grams_per_cup(name).map(|grams_per_cup| WeightIngredient {
                name: name.to_string(),
                grams_per_cup,
            })
        })
        .collect();
    ListWeightIngredientsResponse { ingredients }
}

/// Convert a user-entered cup amount of an ingredient to grams
pub fn cups_to_grams(catalog: &Catalog, ingredient: &str, cups: &str) -> Result<CupsToGramsResponse, String> {
    let table = catalog.ingredient_weights();
    if table.grams_per_cup(ingredient).is_none() {
        return Err(KitchenError::UnknownIngredient {
            name: ingredient.to_string(),
        }
        .to_string());
    }

    let cups = parse_amount(cups);
    let grams = match cups {
        Some(cups) => Some(grams_for_cups(table, ingredient, cups).map_err(|e| e.to_string())?),
        None => None,
    };

    Ok(CupsToGramsResponse {
        ingredient: ingredient.trim().to_lowercase(),
        cups,
        grams,
        formatted: grams.map(format_grams),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cups_to_grams_tool() {
        let catalog = Catalog::builtin();
        let resp = cups_to_grams(&catalog, "flour", "1.5").unwrap();
        assert_eq!(resp.grams, Some(180.0));
        assert_eq!(resp.formatted.as_deref(), Some("180 g"));
    }

    #[test]
    fn test_rounding_only_in_formatted() {
        let catalog = Catalog::builtin();
        let resp = cups_to_grams(&catalog, "Butter", "0.333").unwrap();
        assert_eq!(resp.ingredient, "butter");
        assert!((resp.grams.unwrap() - 75.591).abs() < 1e-9);
        assert_eq!(resp.formatted.as_deref(), Some("76 g"));
    }

    #[test]
    fn test_blank_cups() {
        let catalog = Catalog::builtin();
        let resp = cups_to_grams(&catalog, "sugar", "").unwrap();
        assert_eq!(resp.grams, None);
        assert_eq!(resp.formatted, None);
    }

    #[test]
    fn test_unknown_ingredient() {
        let catalog = Catalog::builtin();
        let err = cups_to_grams(&catalog, "cocoa", "1").unwrap_err();
        assert_eq!(err, "Unknown ingredient: 'cocoa'");
    }

    #[test]
    fn test_list_weight_ingredients() {
        let catalog = Catalog::builtin();
        let resp = list_weight_ingredients(&catalog);
        let names: Vec<&str> = resp.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["butter", "flour", "sugar"]);
        assert_eq!(resp.ingredients[1].grams_per_cup, 120.0);
    }
}
