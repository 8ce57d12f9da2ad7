//! Kitchen Status Tool
//!
//! Provides runtime status information about the Conversion Kitchen service.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::catalog::Catalog;
use crate::kitchen::UnitCategory;

/// Package version reported by the status tool and the server info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage instructions for AI assistants
pub const KITCHEN_INSTRUCTIONS: &str = r#"
# Conversion Kitchen Instructions

The Conversion Kitchen converts kitchen measurements, scales recipe templates
and turns cups of common ingredients into grams.

---

## Converting Measurements

**Tool:** `convert_measurement`

| Parameter | Example | Notes |
|-----------|---------|-------|
| `value` | `"1.5"` | Text. Blank or non-numeric text returns an empty result |
| `category` | `"volume"` | `volume`, `weight`, or `temperature` |
| `from_unit` | `"cup"` | Must belong to the category |
| `to_unit` | `"ml"` | Must belong to the category |

Call `list_units` to see the units of a category. Units never convert across
categories: asking for `cup` in `weight` is an error. To weigh a cup of flour,
use `cups_to_grams` instead.

The `formatted` field is the display value, rounded to 2 decimals with the
target unit appended (e.g. `"236.59 ml"`).

### Temperature

Fahrenheit, Celsius and Kelvin use exact formulas:
- F → C: (F - 32) × 5/9
- C → F: C × 9/5 + 32
- C → K: C + 273.15

---

## Scaling Recipes

1. Call `list_recipe_templates` to find a template id
2. Call `scale_recipe` with `template_id` and `desired_servings`
   - `original_servings` defaults to the template's base servings
   - `unit_system` is `us` (default) or `metric`
3. Share the `markdown` field, or call `export_scaled_recipe` for the text only

Scaled amounts are rounded to 2 decimals. A desired servings value of `0` is
allowed and zeroes every amount. Original servings must be greater than 0.

---

## Cups to Grams

**Tool:** `cups_to_grams` with `ingredient` and `cups` (text).

Only ingredients listed by `list_weight_ingredients` are known. The `grams`
field is unrounded; `formatted` is rounded to the nearest gram.
"#;

/// Counts describing the loaded catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub source: String,
    pub volume_units: usize,
    pub weight_units: usize,
    pub temperature_units: usize,
    pub weight_ingredients: usize,
    pub recipe_templates: usize,
}

/// Runtime status of the Conversion Kitchen service
#[derive(Debug, Clone, Serialize)]
pub struct KitchenStatus {
    pub version: &'static str,

    pub catalog: CatalogSummary,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    catalog: Arc<Catalog>,
    catalog_source: String,
}

impl StatusTracker {
    pub fn new(catalog: Arc<Catalog>, catalog_source: String) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            catalog,
            catalog_source,
        }
    }

    fn catalog_summary(&self) -> CatalogSummary {
        CatalogSummary {
            source: self.catalog_source.clone(),
            volume_units: self.catalog.units(UnitCategory::Volume).len(),
            weight_units: self.catalog.units(UnitCategory::Weight).len(),
            temperature_units: self.catalog.units(UnitCategory::Temperature).len(),
            weight_ingredients: self.catalog.ingredient_weights().len(),
            recipe_templates: self.catalog.templates().len(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> KitchenStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        KitchenStatus {
            version: VERSION,
            catalog: self.catalog_summary(),
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
