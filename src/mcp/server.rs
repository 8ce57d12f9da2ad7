//! Conversion Kitchen MCP Server Implementation
//!
//! Implements the MCP server with all kitchen tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::tools::convert;
use crate::tools::recipes;
use crate::tools::status::StatusTracker;
use crate::tools::weights;

/// Conversion Kitchen MCP Service
#[derive(Clone)]
pub struct KitchenService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    catalog: Arc<Catalog>,
    tool_router: ToolRouter<KitchenService>,
}

impl KitchenService {
    pub fn new(catalog: Catalog, catalog_source: String) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                Arc::clone(&catalog),
                catalog_source,
            ))),
            catalog,
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Converter Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Unit category: volume, weight, or temperature
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertMeasurementParams {
    /// Amount as entered, e.g. "1.5" (blank or non-numeric returns an empty result)
    pub value: String,
    /// Unit category: volume, weight, or temperature
    pub category: String,
    /// Unit to convert from (must belong to the category)
    pub from_unit: String,
    /// Unit to convert to (must belong to the category)
    pub to_unit: String,
}

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecipeTemplateParams {
    /// Template ID (e.g. "cookies")
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleRecipeParams {
    /// Template ID to scale
    pub template_id: String,
    /// Unit system: us or metric (default us)
    pub unit_system: Option<String>,
    /// Servings the recipe makes (default: the template's base servings)
    pub original_servings: Option<f64>,
    /// Servings wanted. 0 is allowed and zeroes every amount
    pub desired_servings: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FeaturedRecipeParams {
    /// Optional seed for a repeatable pick
    pub seed: Option<u64>,
}

// ============================================================================
// Weight Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CupsToGramsParams {
    /// Ingredient name (see list_weight_ingredients)
    pub ingredient: String,
    /// Cups as entered, e.g. "1.5" (blank or non-numeric returns an empty result)
    pub cups: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl KitchenService {
    // --- Status ---

    #[tool(description = "Get the current status of the Conversion Kitchen service including version, catalog summary, and process information")]
    async fn kitchen_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        json_result(&status)
    }

    #[tool(description = "Get instructions for converting measurements, scaling recipes, and weighing ingredients. Call this when unsure how to use the kitchen tools.")]
    fn kitchen_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::KITCHEN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(KITCHEN_INSTRUCTIONS)]))
    }

    // --- Converter ---

    #[tool(description = "List the units of a category (volume, weight, or temperature) in display order")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = convert::list_units(&self.catalog, &p.category)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Convert a value between two units of the same category. Returns the raw result and a display string rounded to 2 decimals.")]
    fn convert_measurement(&self, Parameters(p): Parameters<ConvertMeasurementParams>) -> Result<CallToolResult, McpError> {
        let result = convert::convert_measurement(&self.catalog, &p.value, &p.category, &p.from_unit, &p.to_unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Recipes ---

    #[tool(description = "List the built-in recipe templates with their base servings")]
    fn list_recipe_templates(&self) -> Result<CallToolResult, McpError> {
        json_result(&recipes::list_recipe_templates(&self.catalog))
    }

    #[tool(description = "Get a recipe template with its US and metric ingredient amounts")]
    fn get_recipe_template(&self, Parameters(p): Parameters<GetRecipeTemplateParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::get_recipe_template(&self.catalog, &p.id)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Scale a recipe template to a desired number of servings. Returns the scale factor, scaled ingredients (rounded to 2 decimals), and a markdown export.")]
    fn scale_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::scale_recipe(
            &self.catalog,
            &p.template_id,
            p.unit_system.as_deref(),
            p.original_servings,
            p.desired_servings,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Export a scaled recipe as shareable markdown text")]
    fn export_scaled_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::export_scaled_recipe(
            &self.catalog,
            &p.template_id,
            p.unit_system.as_deref(),
            p.original_servings,
            p.desired_servings,
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        Ok(CallToolResult::success(vec![Content::text(result.markdown)]))
    }

    #[tool(description = "Pick a featured recipe for kitchen inspiration. Pass a seed for a repeatable pick.")]
    fn featured_recipe(&self, Parameters(p): Parameters<FeaturedRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::featured_recipe(&self.catalog, p.seed)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Ingredient Weights ---

    #[tool(description = "List the ingredients with known grams-per-cup weights")]
    fn list_weight_ingredients(&self) -> Result<CallToolResult, McpError> {
        json_result(&weights::list_weight_ingredients(&self.catalog))
    }

    #[tool(description = "Convert cups of a known ingredient (flour, sugar, butter) to grams")]
    fn cups_to_grams(&self, Parameters(p): Parameters<CupsToGramsParams>) -> Result<CallToolResult, McpError> {
        let result = weights::cups_to_grams(&self.catalog, &p.ingredient, &p.cups)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for KitchenService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "conversion-kitchen".into(),
                version: crate::tools::status::VERSION.into(),
                title: Some("The Conversion Kitchen".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "The Conversion Kitchen - kitchen measurement conversion and recipe scaling. \
                 Call kitchen_instructions first if unsure. \
                 Converter: list_units, convert_measurement (volume, weight, temperature). \
                 Recipes: list_recipe_templates, get_recipe_template, scale_recipe, export_scaled_recipe, featured_recipe. \
                 Weights: list_weight_ingredients, cups_to_grams."
                    .into(),
            ),
        }
    }
}
