//! Recipe scaler tools
//!
//! Template listing, scaling with markdown export, and the featured recipe
//! picker.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::kitchen::{format_factor, scale_recipe as scale_template};
use crate::models::{FeaturedRecipe, RecipeTemplate, ScaledIngredient, UnitSystem};

/// Template summary for listing
#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub base_servings: u32,
    pub ingredient_count: usize,
}

/// Response for list_recipe_templates
#[derive(Debug, Serialize)]
pub struct ListTemplatesResponse {
    pub templates: Vec<TemplateSummary>,
    pub count: usize,
}

/// Response for scale_recipe
#[derive(Debug, Serialize)]
pub struct ScaleRecipeResponse {
    pub template_id: String,
    pub name: String,
    pub unit_system: UnitSystem,
    pub original_servings: f64,
    pub desired_servings: f64,
    pub factor: f64,
    /// "Scale by" label, e.g. "0.50×"
    pub factor_label: String,
    pub ingredients: Vec<ScaledIngredient>,
    pub markdown: String,
}

/// Response for export_scaled_recipe
#[derive(Debug, Serialize)]
pub struct ExportScaledRecipeResponse {
    pub template_id: String,
    pub markdown: String,
}

/// Response for featured_recipe
#[derive(Debug, Serialize)]
pub struct FeaturedRecipeResponse {
    pub recipe: FeaturedRecipe,
    pub seed: Option<u64>,
}

// ============================================================================
// Template Tools
// ============================================================================

pub fn list_recipe_templates(catalog: &Catalog) -> ListTemplatesResponse {
    let templates: Vec<TemplateSummary> = catalog
        .templates()
        .iter()
        .map(|t| TemplateSummary {
            id: t.id.clone(),
            name: t.name.clone(),
            base_servings: t.base_servings,
            ingredient_count: t.ingredients.len(),
        })
        .collect();
    let count = templates.len();
    ListTemplatesResponse { templates, count }
}

pub fn get_recipe_template(catalog: &Catalog, id: &str) -> Result<RecipeTemplate, String> {
    catalog.template(id).cloned().map_err(|e| e.to_string())
}

// ============================================================================
// Scaling Tools
// ============================================================================

fn parse_unit_system(unit_system: Option<&str>) -> Result<UnitSystem, String> {
    match unit_system {
        None => Ok(UnitSystem::default()),
        Some(s) => UnitSystem::from_str(s)
            .ok_or_else(|| format!("Unknown unit system '{}'. Expected us or metric", s)),
    }
}

/// Scale a template to a desired number of servings.
///
/// Without an original servings value the template's base servings are used.
pub fn scale_recipe(
    catalog: &Catalog,
    template_id: &str,
    unit_system: Option<&str>,
    original_servings: Option<f64>,
    desired_servings: Option<f64>,
) -> Result<ScaleRecipeResponse, String> {
    let template = catalog.template(template_id).map_err(|e| e.to_string())?;
    let system = parse_unit_system(unit_system)?;
    let original = original_servings.unwrap_or(f64::from(template.base_servings));

    let scaled = scale_template(template, system, Some(original), desired_servings)
        .map_err(|e| e.to_string())?;

    tracing::debug!(
        "Scaled '{}' from {} to {} servings (factor {})",
        scaled.template_id,
        scaled.original_servings,
        scaled.desired_servings,
        scaled.factor
    );

    let markdown = scaled.to_markdown();
    Ok(ScaleRecipeResponse {
        factor_label: format_factor(scaled.factor),
        template_id: scaled.template_id,
        name: scaled.name,
        unit_system: scaled.unit_system,
        original_servings: scaled.original_servings,
        desired_servings: scaled.desired_servings,
        factor: scaled.factor,
        ingredients: scaled.ingredients,
        markdown,
    })
}

/// Markdown export of a scaled recipe
pub fn export_scaled_recipe(
    catalog: &Catalog,
    template_id: &str,
    unit_system: Option<&str>,
    original_servings: Option<f64>,
    desired_servings: Option<f64>,
) -> Result<ExportScaledRecipeResponse, String> {
    let scaled = scale_recipe(
        catalog,
        template_id,
        unit_system,
        original_servings,
        desired_servings,
    )?;
    Ok(ExportScaledRecipeResponse {
        template_id: scaled.template_id,
        markdown: scaled.markdown,
    })
}

// ============================================================================
// Featured Recipe
// ============================================================================

/// Choose one featured recipe
pub fn pick_featured<'a, R: Rng + ?Sized>(
    featured: &'a [FeaturedRecipe],
    rng: &mut R,
) -> Option<&'a FeaturedRecipe> {
    featured.choose(rng)
}

/// Pick a featured recipe, deterministic when a seed is given
pub fn featured_recipe(catalog: &Catalog, seed: Option<u64>) -> Result<FeaturedRecipeResponse, String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let recipe = pick_featured(catalog.featured(), &mut rng)
        .cloned()
        .ok_or_else(|| "No featured recipes in the catalog".to_string())?;
    Ok(FeaturedRecipeResponse { recipe, seed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_recipe_templates() {
        let catalog = Catalog::builtin();
        let resp = list_recipe_templates(&catalog);
        assert_eq!(resp.count, 3);
        let ids: Vec<&str> = resp.templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["cookies", "cake", "bread"]);
    }

    #[test]
    fn test_get_recipe_template() {
        let catalog = Catalog::builtin();
        assert_eq!(get_recipe_template(&catalog, "cake").unwrap().base_servings, 12);
        assert!(get_recipe_template(&catalog, "soup").is_err());
    }

    #[test]
    fn test_scale_recipe_defaults_original_to_base() {
        let catalog = Catalog::builtin();
        let resp = scale_recipe(&catalog, "cookies", None, None, Some(12.0)).unwrap();
        assert_eq!(resp.original_servings, 24.0);
        assert_eq!(resp.factor, 0.5);
        assert_eq!(resp.factor_label, "0.50×");
        assert_eq!(resp.unit_system, UnitSystem::Us);
        assert!(resp.markdown.starts_with("### Cozy Cookies (scaled)\n\nServings: 12 (base 24)\n"));
    }

    #[test]
    fn test_scale_recipe_metric() {
        let catalog = Catalog::builtin();
        let resp = scale_recipe(&catalog, "bread", Some("metric"), Some(12.0), Some(24.0)).unwrap();
        assert_eq!(resp.ingredients[0].amount, 720.0);
        assert_eq!(resp.ingredients[0].unit, "g");
        assert!(resp.markdown.contains("- **720 g** Flour\n"));
    }

    #[test]
    fn test_scale_recipe_errors() {
        let catalog = Catalog::builtin();
        assert!(scale_recipe(&catalog, "cookies", None, None, None).is_err());
        assert!(scale_recipe(&catalog, "cookies", None, Some(0.0), Some(6.0)).is_err());
        assert!(scale_recipe(&catalog, "cookies", Some("imperial"), None, Some(6.0)).is_err());
        assert!(scale_recipe(&catalog, "pie", None, None, Some(6.0)).is_err());
    }

    #[test]
    fn test_export_matches_scale_markdown() {
        let catalog = Catalog::builtin();
        let scaled = scale_recipe(&catalog, "cake", Some("us"), None, Some(6.0)).unwrap();
        let exported = export_scaled_recipe(&catalog, "cake", Some("us"), None, Some(6.0)).unwrap();
        assert_eq!(scaled.markdown, exported.markdown);
    }

    #[test]
    fn test_featured_recipe_seeded_is_deterministic() {
        let catalog = Catalog::builtin();
        let first = featured_recipe(&catalog, Some(7)).unwrap();
        let second = featured_recipe(&catalog, Some(7)).unwrap();
        assert_eq!(first.recipe, second.recipe);
        assert!(catalog.featured().contains(&first.recipe));
    }

    #[test]
    fn test_pick_featured_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_featured(&[], &mut rng).is_none());
    }
}
