//! Unit conversion
//!
//! Converts a magnitude between two units of the same category.

use crate::catalog::Catalog;

use super::error::{KitchenError, KitchenResult};
use super::units::{same_symbol, TemperatureUnit, UnitCategory, KELVIN_OFFSET};

/// Convert `value` from one unit to another within `category`.
///
/// Volume and weight go through the category's base unit:
/// `value * factor(from) / factor(to)`. Temperature uses the explicit affine
/// formula for the pair. Converting a unit to itself returns `value`
/// untouched.
///
/// Fails with `UnknownUnit` if either unit is not part of the category.
pub fn convert(
    catalog: &Catalog,
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: UnitCategory,
) -> KitchenResult<f64> {
    match catalog.linear_table(category) {
        Some(table) => {
            let from = table
                .get(from_unit)
                .ok_or_else(|| KitchenError::unknown_unit(from_unit, category))?;
            let to = table
                .get(to_unit)
                .ok_or_else(|| KitchenError::unknown_unit(to_unit, category))?;

            if same_symbol(&from.symbol, &to.symbol) {
                return Ok(value);
            }
            Ok(value * from.factor / to.factor)
        }
        None => {
            let from = TemperatureUnit::from_symbol(from_unit)
                .ok_or_else(|| KitchenError::unknown_unit(from_unit, category))?;
            let to = TemperatureUnit::from_symbol(to_unit)
                .ok_or_else(|| KitchenError::unknown_unit(to_unit, category))?;
            Ok(convert_temperature(value, from, to))
        }
    }
}

/// Apply the temperature formula for a pair of scales
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Fahrenheit, Fahrenheit) | (Celsius, Celsius) | (Kelvin, Kelvin) => value,
        (Fahrenheit, Celsius) => fahrenheit_to_celsius(value),
        (Celsius, Fahrenheit) => celsius_to_fahrenheit(value),
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Fahrenheit, Kelvin) => fahrenheit_to_celsius(value) + KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => celsius_to_fahrenheit(value - KELVIN_OFFSET),
    }
}

fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::units::{G_PER_LB, ML_PER_CUP};

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_cup_to_ml_is_exact() {
        let catalog = Catalog::builtin();
        let ml = convert(&catalog, 1.0, "cup", "ml", UnitCategory::Volume).unwrap();
        assert_eq!(ml, 236.588);
        assert_eq!(ml, ML_PER_CUP);
    }

    #[test]
    fn test_volume_conversions() {
        let catalog = Catalog::builtin();
        let tsp = convert(&catalog, 1.0, "tbsp", "tsp", UnitCategory::Volume).unwrap();
        assert!((tsp - 3.0).abs() < 0.001);

        let liters = convert(&catalog, 2500.0, "ml", "liter", UnitCategory::Volume).unwrap();
        assert_close(liters, 2.5);

        let cups = convert(&catalog, 1.0, "quart", "cup", UnitCategory::Volume).unwrap();
        assert!((cups - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_weight_conversions() {
        let catalog = Catalog::builtin();
        let grams = convert(&catalog, 2.0, "lb", "g", UnitCategory::Weight).unwrap();
        assert_close(grams, 2.0 * G_PER_LB);

        let oz = convert(&catalog, 1.0, "lb", "oz", UnitCategory::Weight).unwrap();
        assert!((oz - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_temperature_fixed_points() {
        let catalog = Catalog::builtin();
        let t = UnitCategory::Temperature;
        assert_eq!(convert(&catalog, 32.0, "F", "C", t).unwrap(), 0.0);
        assert_eq!(convert(&catalog, 212.0, "F", "C", t).unwrap(), 100.0);
        assert_eq!(convert(&catalog, 0.0, "C", "K", t).unwrap(), 273.15);
        assert_eq!(convert(&catalog, 100.0, "C", "F", t).unwrap(), 212.0);
        assert_eq!(convert(&catalog, 273.15, "K", "C", t).unwrap(), 0.0);
    }

    #[test]
    fn test_temperature_via_celsius() {
        let catalog = Catalog::builtin();
        let t = UnitCategory::Temperature;
        assert_close(convert(&catalog, 32.0, "F", "K", t).unwrap(), 273.15);
        assert_close(convert(&catalog, 373.15, "K", "F", t).unwrap(), 212.0);
        // -40 is the same on both scales
        assert_close(convert(&catalog, -40.0, "F", "C", t).unwrap(), -40.0);
    }

    #[test]
    fn test_identity_is_exact() {
        let catalog = Catalog::builtin();
        for category in UnitCategory::ALL {
            for unit in catalog.units(category) {
                for value in [0.1, -3.7, 350.0, 1.0 / 3.0] {
                    assert_eq!(convert(&catalog, value, unit, unit, category).unwrap(), value);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        let catalog = Catalog::builtin();
        for category in UnitCategory::ALL {
            let units = catalog.units(category);
            for a in &units {
                for b in &units {
                    for value in [-40.0, 0.0, 1.5, 350.0, 1234.5678] {
                        let there = convert(&catalog, value, a, b, category).unwrap();
                        let back = convert(&catalog, there, b, a, category).unwrap();
                        assert_close(back, value);
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_cycle_is_identity() {
        use TemperatureUnit::*;
        for value in [-459.67, 0.0, 72.5, 450.0] {
            let c = convert_temperature(value, Fahrenheit, Celsius);
            let k = convert_temperature(c, Celsius, Kelvin);
            let f = convert_temperature(k, Kelvin, Fahrenheit);
            assert_close(f, value);
        }
    }

    #[test]
    fn test_unknown_unit_in_category() {
        let catalog = Catalog::builtin();
        assert_eq!(
            convert(&catalog, 1.0, "cup", "g", UnitCategory::Volume),
            Err(KitchenError::UnknownUnit {
                unit: "g".to_string(),
                category: UnitCategory::Volume
            })
        );
        assert_eq!(
            convert(&catalog, 1.0, "pinch", "tsp", UnitCategory::Volume),
            Err(KitchenError::UnknownUnit {
                unit: "pinch".to_string(),
                category: UnitCategory::Volume
            })
        );
        assert!(convert(&catalog, 1.0, "F", "cup", UnitCategory::Temperature).is_err());
        assert!(convert(&catalog, 1.0, "oz", "lb", UnitCategory::Volume).is_err());
    }

    #[test]
    fn test_units_are_case_insensitive() {
        let catalog = Catalog::builtin();
        let ml = convert(&catalog, 1.0, "CUP", " ml", UnitCategory::Volume).unwrap();
        assert_eq!(ml, ML_PER_CUP);
        let c = convert(&catalog, 212.0, "f", "c", UnitCategory::Temperature).unwrap();
        assert_eq!(c, 100.0);
    }
}
