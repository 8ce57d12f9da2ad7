//! Measurement converter tools
//!
//! Parses text input, runs the unit converter and formats the result the way
//! the calculator displays it.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::kitchen::{self, format_amount, parse_amount, KitchenError, UnitCategory};

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub category: UnitCategory,
    pub base_unit: Option<&'static str>,
    pub units: Vec<String>,
}

/// Response for convert_measurement
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub category: UnitCategory,
    pub from_unit: String,
    pub to_unit: String,
    /// Parsed input, None when the text was blank or not a number
    pub value: Option<f64>,
    pub result: Option<f64>,
    /// Result to 2 decimals with the target unit appended
    pub formatted: Option<String>,
}

pub fn parse_category(category: &str) -> Result<UnitCategory, String> {
    UnitCategory::from_str(category).ok_or_else(|| {
        format!(
            "Unknown category '{}'. Expected volume, weight, or temperature",
            category
        )
    })
}

/// List the units of a category in display order
pub fn list_units(catalog: &Catalog, category: &str) -> Result<ListUnitsResponse, String> {
    let category = parse_category(category)?;
    Ok(ListUnitsResponse {
        category,
        base_unit: category.base_unit(),
        units: catalog
            .units(category)
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Convert a user-entered value between two units of a category.
///
/// Blank or non-numeric input is not an error: the response comes back with
/// an empty result so the display can stay blank.
pub fn convert_measurement(
    catalog: &Catalog,
    value: &str,
    category: &str,
    from_unit: &str,
    to_unit: &str,
) -> Result<ConvertResponse, String> {
    let category = parse_category(category)?;

    let resolve = |unit: &str| {
        catalog
            .canonical_unit(category, unit)
            .ok_or_else(|| KitchenError::unknown_unit(unit, category).to_string())
    };
    let from_symbol = resolve(from_unit)?;
    let to_symbol = resolve(to_unit)?;

    let mut response = ConvertResponse {
        category,
        from_unit: from_symbol.to_string(),
        to_unit: to_symbol.to_string(),
        value: parse_amount(value),
        result: None,
        formatted: None,
    };

    let Some(amount) = response.value else {
        tracing::debug!("Skipping conversion of non-numeric input {:?}", value);
        return Ok(response);
    };

    let converted = kitchen::convert(catalog, amount, from_unit, to_unit, category)
        .map_err(|e| e.to_string())?;

    response.formatted = Some(format_amount(converted, &response.to_unit));
    response.result = Some(converted);
    Ok(response)
}
