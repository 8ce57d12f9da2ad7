//! Recipe scaling
//!
//! Scale factors from serving counts, scaled ingredient lists and the
//! markdown export of a scaled recipe.

use crate::models::{RecipeTemplate, ScaledIngredient, ScaledRecipe, UnitSystem};

use super::error::{KitchenError, KitchenResult};

/// Ratio of desired servings to original servings.
///
/// Undefined when either count is missing or not finite, when the original
/// count is not positive, or when the desired count is negative. An explicit
/// desired count of `0` is a valid factor of `0`.
pub fn scale_factor(original_servings: Option<f64>, desired_servings: Option<f64>) -> KitchenResult<f64> {
    let original = original_servings
        .ok_or(KitchenError::UndefinedScale("original servings missing"))?;
    let desired = desired_servings
        .ok_or(KitchenError::UndefinedScale("desired servings missing"))?;

    if !original.is_finite() || !desired.is_finite() {
        return Err(KitchenError::UndefinedScale("servings must be finite numbers"));
    }
    if original <= 0.0 {
        return Err(KitchenError::UndefinedScale("original servings must be greater than 0"));
    }
    if desired < 0.0 {
        return Err(KitchenError::UndefinedScale("desired servings cannot be negative"));
    }
    if desired == 0.0 {
        // also folds -0.0 so amounts never print as "-0"
        return Ok(0.0);
    }

    Ok(desired / original)
}

/// Round to 2 decimal places, halves away from zero
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale every ingredient of a template, keeping declaration order
pub fn scale_ingredients(
    template: &RecipeTemplate,
    system: UnitSystem,
    factor: f64,
) -> Vec<ScaledIngredient> {
    template
        .ingredients
        .iter()
        .map(|ingredient| {
            let (amount, unit) = ingredient.measure(system);
            ScaledIngredient {
                name: ingredient.name.clone(),
                amount: round_to_hundredths(amount * factor),
                unit: unit.to_string(),
            }
        })
        .collect()
}

/// Scale a template from `original_servings` to `desired_servings`
pub fn scale_recipe(
    template: &RecipeTemplate,
    system: UnitSystem,
    original_servings: Option<f64>,
    desired_servings: Option<f64>,
) -> KitchenResult<ScaledRecipe> {
    let factor = scale_factor(original_servings, desired_servings)?;
    // scale_factor has already rejected missing values
    let original = original_servings.unwrap_or_default();
    let desired = desired_servings.unwrap_or_default();

    Ok(ScaledRecipe {
        template_id: template.id.clone(),
        name: template.name.clone(),
        unit_system: system,
        original_servings: original,
        desired_servings: desired,
        factor,
        ingredients: scale_ingredients(template, system, factor),
    })
}

/// Render a scaled ingredient list as shareable markdown.
///
/// ```text
/// ### <name> (scaled)
///
/// Servings: <new> (base <orig>)
///
/// Ingredients:
/// - **<amount> <unit>** <name>
/// ```
pub fn export_markdown(
    name: &str,
    desired_servings: f64,
    original_servings: f64,
    ingredients: &[ScaledIngredient],
) -> String {
    let mut markdown = format!(
        "### {} (scaled)\n\nServings: {} (base {})\n\nIngredients:\n",
        name, desired_servings, original_servings
    );
    for ingredient in ingredients {
        markdown.push_str(&format!(
            "- **{} {}** {}\n",
            ingredient.amount, ingredient.unit, ingredient.name
        ));
    }
    markdown
}

impl ScaledRecipe {
    pub fn to_markdown(&self) -> String {
        export_markdown(
            &self.name,
            self.desired_servings,
            self.original_servings,
            &self.ingredients,
        )
    }
}
