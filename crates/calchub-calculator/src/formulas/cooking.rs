//! Kitchen calculators.

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

pub struct RecipeScaler;

impl Formula for RecipeScaler {
    fn id(&self) -> &'static str {
        "recipe_scaler"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let original = positive(inputs, "original_servings")?;
        let desired = positive(inputs, "desired_servings")?;
        let factor = desired / original;
        Ok(format!("Scale Factor: {factor:.2} (multiply each ingredient by {factor:.2})"))
    }
}

pub struct CookingTime;

impl Formula for CookingTime {
    fn id(&self) -> &'static str {
        "cooking_time"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let time_per_unit = positive(inputs, "time_per_unit")?;
        let minutes = (weight * time_per_unit).round() as i64;
        Ok(format!("Cooking Time: {minutes} minutes"))
    }
}

#[derive(Clone, Copy)]
enum OvenScale {
    Fahrenheit,
    Celsius,
}

impl OvenScale {
    fn label(self) -> &'static str {
        match self {
            OvenScale::Fahrenheit => "Fahrenheit",
            OvenScale::Celsius => "Celsius",
        }
    }
}

fn oven_scale(unit: &str) -> EvalResult<OvenScale> {
    match unit.to_lowercase().as_str() {
        "fahrenheit" => Ok(OvenScale::Fahrenheit),
        "celsius" => Ok(OvenScale::Celsius),
        other => Err(EvalError::UnknownUnit(other.to_string())),
    }
}

pub struct OvenTemp;

impl Formula for OvenTemp {
    fn id(&self) -> &'static str {
        "oven_temp"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let temp = inputs.get_f64("temp")?;
        let from = oven_scale(inputs.get_str("from")?)?;
        let to = oven_scale(inputs.get_str("to")?)?;
        let celsius = match from {
            OvenScale::Fahrenheit => (temp - 32.0) * 5.0 / 9.0,
            OvenScale::Celsius => temp,
        };
        let converted = match to {
            OvenScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            OvenScale::Celsius => celsius,
        };
        Ok(format!(
            "Oven Temperature: {temp:.2} {} = {converted:.2} {}",
            from.label(),
            to.label()
        ))
    }
}
