//! Vehicle calculators.

use std::f64::consts::PI;

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn positive(inputs: &InputBag, field: &str) -> EvalResult<f64> {
    let value = inputs.get_f64(field)?;
    if value <= 0.0 {
        return Err(EvalError::domain(format!("{field} must be greater than zero")));
    }
    Ok(value)
}

fn non_negative(inputs: &InputBag, field: &str) -> EvalResult<f64> {
    let value = inputs.get_f64(field)?;
    if value < 0.0 {
        return Err(EvalError::domain(format!("{field} must not be negative")));
    }
    Ok(value)
}

pub struct FuelEconomy;

impl Formula for FuelEconomy {
    fn id(&self) -> &'static str {
        "fuel_economy"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let distance = non_negative(inputs, "distance")?;
        let fuel = positive(inputs, "fuel")?;
        Ok(format!("Fuel Economy: {:.2} miles per gallon", distance / fuel))
    }
}

pub struct FuelEfficiency;

impl Formula for FuelEfficiency {
    fn id(&self) -> &'static str {
        "fuel_efficiency"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let distance = positive(inputs, "distance")?;
        let fuel = non_negative(inputs, "fuel")?;
        Ok(format!("Fuel Efficiency: {:.2} L/100km", fuel / distance * 100.0))
    }
}

pub struct FuelCost;

impl Formula for FuelCost {
    fn id(&self) -> &'static str {
        "fuel_cost"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let distance = non_negative(inputs, "distance")?;
        let mpg = positive(inputs, "mpg")?;
        let price = non_negative(inputs, "price")?;
        let gallons = distance / mpg;
        Ok(format!("Fuel Needed: {gallons:.2} gallons, Cost: ${:.2}", gallons * price))
    }
}

pub struct TireSize;

impl Formula for TireSize {
    fn id(&self) -> &'static str {
        "tire_size"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let width = positive(inputs, "width")?;
        let aspect = inputs.get_f64("aspect")?;
        if !(aspect > 0.0 && aspect <= 100.0) {
            return Err(EvalError::domain("aspect must be between 0 and 100"));
        }
        let diameter = positive(inputs, "diameter")?;
        // width is millimeters, wheel diameter is inches
        let sidewall_mm = width * aspect / 100.0;
        let overall = diameter + 2.0 * sidewall_mm / 25.4;
        Ok(format!(
            "Overall Diameter: {overall:.2} inches, Circumference: {:.2} inches",
            PI * overall
        ))
    }
}
