//! Unit converters.
//!
//! Every linear family goes through a base-unit factor table; only
//! temperature needs formulas of its own. Unit names are the
//! snake_case values the forms submit and are matched case-insensitively.

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

type UnitTable = &'static [(&'static str, f64)];

// factors express one unit in the family's base unit
const LENGTH_UNITS: UnitTable = &[
    ("meters", 1.0),
    ("kilometers", 1000.0),
    ("centimeters", 0.01),
    ("millimeters", 0.001),
    ("miles", 1609.344),
    ("yards", 0.9144),
    ("feet", 0.3048),
    ("inches", 0.0254),
];

const WEIGHT_UNITS: UnitTable = &[
    ("kilograms", 1.0),
    ("grams", 0.001),
    ("milligrams", 1e-6),
    ("pounds", 0.453_592_37),
    ("ounces", 0.028_349_523_125),
    ("tons", 1000.0),
];

const VOLUME_UNITS: UnitTable = &[
    ("liters", 1.0),
    ("milliliters", 0.001),
    ("gallons", 3.785_411_784),
    ("quarts", 0.946_352_946),
    ("pints", 0.473_176_473),
    ("cups", 0.236_588_236_5),
    ("fluid_ounces", 0.029_573_529_562_5),
    ("cubic_meters", 1000.0),
];

const TIME_UNITS: UnitTable = &[
    ("seconds", 1.0),
    ("minutes", 60.0),
    ("hours", 3600.0),
    ("days", 86_400.0),
    ("weeks", 604_800.0),
    ("years", 31_557_600.0),
];

const SPEED_UNITS: UnitTable = &[
    ("meters_per_second", 1.0),
    ("kilometers_per_hour", 1.0 / 3.6),
    ("miles_per_hour", 0.447_04),
    ("feet_per_second", 0.3048),
    ("knots", 0.514_444),
];

const ENERGY_UNITS: UnitTable = &[
    ("joules", 1.0),
    ("kilojoules", 1000.0),
    ("calories", 4.184),
    ("kilocalories", 4184.0),
    ("watt_hours", 3600.0),
    ("kilowatt_hours", 3.6e6),
];

const POWER_UNITS: UnitTable = &[
    ("watts", 1.0),
    ("kilowatts", 1000.0),
    ("horsepower", 745.699_872),
    ("btu_per_hour", 0.293_071_07),
];

const PRESSURE_UNITS: UnitTable = &[
    ("pascals", 1.0),
    ("kilopascals", 1000.0),
    ("bar", 100_000.0),
    ("psi", 6894.757),
    ("atmospheres", 101_325.0),
];

const AREA_UNITS: UnitTable = &[
    ("sqm", 1.0),
    ("sqcm", 0.0001),
    ("sqkm", 1e6),
    ("sqft", 0.092_903_04),
    ("sqin", 0.000_645_16),
    ("sqyd", 0.836_127_36),
    ("acre", 4046.856_422_4),
    ("hectare", 10_000.0),
];

fn factor(units: UnitTable, unit: &str) -> EvalResult<f64> {
    units
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, f)| *f)
        .ok_or_else(|| EvalError::UnknownUnit(unit.to_string()))
}

fn pretty(unit: &str) -> String {
    unit.replace('_', " ")
}

/// Two decimals for everyday magnitudes, six for values that would
/// otherwise collapse to 0.00.
fn quantity(value: f64) -> String {
    if value == 0.0 || value.abs() >= 0.01 {
        format!("{value:.2}")
    } else {
        format!("{value:.6}")
    }
}

/// A factor-table converter; one instance per linear unit family.
pub struct UnitConverter {
    id: &'static str,
    units: UnitTable,
}

impl UnitConverter {
    pub fn length() -> Self {
        Self { id: "unit_length", units: LENGTH_UNITS }
    }

    pub fn weight() -> Self {
        Self { id: "unit_weight", units: WEIGHT_UNITS }
    }

    pub fn volume() -> Self {
        Self { id: "unit_volume", units: VOLUME_UNITS }
    }

    pub fn time() -> Self {
        Self { id: "unit_time", units: TIME_UNITS }
    }

    pub fn speed() -> Self {
        Self { id: "unit_speed", units: SPEED_UNITS }
    }

    pub fn energy() -> Self {
        Self { id: "unit_energy", units: ENERGY_UNITS }
    }

    pub fn power() -> Self {
        Self { id: "unit_power", units: POWER_UNITS }
    }

    pub fn pressure() -> Self {
        Self { id: "unit_pressure", units: PRESSURE_UNITS }
    }

    pub fn area() -> Self {
        Self { id: "unit_area", units: AREA_UNITS }
    }
}

impl Formula for UnitConverter {
    fn id(&self) -> &'static str {
        self.id
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let value = inputs.get_f64("value")?;
        let from = inputs.get_str("from")?.to_lowercase();
        let to = inputs.get_str("to")?.to_lowercase();
        let converted = value * factor(self.units, &from)? / factor(self.units, &to)?;
        Ok(format!(
            "{} {} = {} {}",
            quantity(value),
            pretty(&from),
            quantity(converted),
            pretty(&to)
        ))
    }
}

fn to_celsius(value: f64, unit: &str) -> EvalResult<f64> {
    let celsius = match unit {
        "celsius" => value,
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        _ => return Err(EvalError::UnknownUnit(unit.to_string())),
    };
    if celsius < -273.15 {
        return Err(EvalError::domain("temperature is below absolute zero"));
    }
    Ok(celsius)
}

fn from_celsius(celsius: f64, unit: &str) -> EvalResult<f64> {
    match unit {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        _ => Err(EvalError::UnknownUnit(unit.to_string())),
    }
}

fn capitalize(unit: &str) -> String {
    let mut chars = unit.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub struct UnitTemperature;

impl Formula for UnitTemperature {
    fn id(&self) -> &'static str {
        "unit_temperature"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let temp = inputs.get_f64("temp")?;
        let from = inputs.get_str("from")?.to_lowercase();
        let to = inputs.get_str("to")?.to_lowercase();
        let converted = from_celsius(to_celsius(temp, &from)?, &to)?;
        Ok(format!("{temp:.2} {} = {converted:.2} {}", capitalize(&from), capitalize(&to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_base_unit() {
        let bag = InputBag::from_pairs(&[("value", "1"), ("from", "miles"), ("to", "feet")]);
        let result = UnitConverter::length().apply(&bag).unwrap();
        assert_eq!(result, "1.00 miles = 5280.00 feet");
    }

    #[test]
    fn small_magnitudes_keep_precision() {
        let bag = InputBag::from_pairs(&[("value", "1"), ("from", "grams"), ("to", "kilograms")]);
        let result = UnitConverter::weight().apply(&bag).unwrap();
        assert!(result.contains("0.001000"), "unexpected formatting: {result}");
    }

    #[test]
    fn unknown_units_are_reported_by_name() {
        let bag = InputBag::from_pairs(&[("value", "1"), ("from", "cubits"), ("to", "meters")]);
        assert_eq!(
            UnitConverter::length().apply(&bag),
            Err(EvalError::UnknownUnit("cubits".into()))
        );
    }

    #[test]
    fn sub_absolute_zero_is_a_domain_error() {
        let bag = InputBag::from_pairs(&[("temp", "-300"), ("from", "celsius"), ("to", "kelvin")]);
        assert!(matches!(UnitTemperature.apply(&bag), Err(EvalError::Domain(_))));
    }
}
