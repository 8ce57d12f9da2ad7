//! Unit types and conversion constants
//!
//! Provides the unit categories, the linear conversion tables for volume and
//! weight, and the temperature scales.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Volume units, canonical base is milliliters
    Volume,
    /// Weight units, canonical base is grams
    Weight,
    /// Temperature scales (affine, no base unit)
    Temperature,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 3] = [
        UnitCategory::Volume,
        UnitCategory::Weight,
        UnitCategory::Temperature,
    ];

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Some(UnitCategory::Volume),
            "weight" => Some(UnitCategory::Weight),
            "temperature" => Some(UnitCategory::Temperature),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "volume",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
        }
    }

    /// Canonical base unit for linear categories
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitCategory::Volume => Some("ml"),
            UnitCategory::Weight => Some("g"),
            UnitCategory::Temperature => None,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;

// ============================================================================
// Temperature
// ============================================================================

/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// A temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Celsius,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| same_symbol(unit.symbol(), symbol))
    }
}

// ============================================================================
// Linear Conversion Tables
// ============================================================================

/// Compare two unit symbols, ignoring case and surrounding whitespace
pub fn same_symbol(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// One unit in a linear conversion table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitFactor {
    /// Unit symbol (e.g., "cup", "g")
    pub symbol: String,
    /// How many base units one of this unit equals
    pub factor: f64,
}

impl UnitFactor {
    pub fn new(symbol: &str, factor: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            factor,
        }
    }
}

/// Ordered unit-to-factor mapping for one linear category.
///
/// Order is the display order of the unit list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionTable {
    units: Vec<UnitFactor>,
}

impl ConversionTable {
    pub fn new(units: Vec<UnitFactor>) -> Self {
        Self { units }
    }

    /// Built-in US customary + metric volume units
    pub fn volume() -> Self {
        Self::new(vec![
            UnitFactor::new("tsp", ML_PER_TSP),
            UnitFactor::new("tbsp", ML_PER_TBSP),
            UnitFactor::new("fl oz", ML_PER_FL_OZ),
            UnitFactor::new("cup", ML_PER_CUP),
            UnitFactor::new("pint", ML_PER_PINT),
            UnitFactor::new("quart", ML_PER_QUART),
            UnitFactor::new("gallon", ML_PER_GALLON),
            UnitFactor::new("ml", 1.0),
            UnitFactor::new("liter", ML_PER_LITER),
        ])
    }

    /// Built-in weight units
    pub fn weight() -> Self {
        Self::new(vec![
            UnitFactor::new("oz", G_PER_OZ),
            UnitFactor::new("lb", G_PER_LB),
            UnitFactor::new("g", 1.0),
            UnitFactor::new("kg", G_PER_KG),
        ])
    }

    pub fn get(&self, symbol: &str) -> Option<&UnitFactor> {
        self.units.iter().find(|u| same_symbol(&u.symbol, symbol))
    }

    /// Conversion factor to the base unit
    pub fn factor(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|u| u.factor)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|u| u.symbol.as_str())
    }

    /// Check table invariants against the category's base unit
    pub fn validate(&self, category: UnitCategory) -> Result<(), String> {
        let base = category
            .base_unit()
            .ok_or_else(|| format!("{} has no linear conversion table", category))?;

        for (i, unit) in self.units.iter().enumerate() {
            if unit.symbol.trim().is_empty() {
                return Err(format!("{} table has an empty unit symbol", category));
            }
            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(format!(
                    "{} unit '{}' has non-positive factor {}",
                    category, unit.symbol, unit.factor
                ));
            }
            if self.units[..i].iter().any(|u| same_symbol(&u.symbol, &unit.symbol)) {
                return Err(format!(
                    "{} unit '{}' is listed more than once",
                    category, unit.symbol
                ));
            }
        }

        match self.factor(base) {
            Some(f) if f == 1.0 => Ok(()),
            Some(f) => Err(format!(
                "{} base unit '{}' must have factor 1, found {}",
                category, base, f
            )),
            None => Err(format!("{} table is missing base unit '{}'", category, base)),
        }
    }
}
