//! Environmental impact estimators using published per-unit emission
//! factors.

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn non_negative(inputs: &InputBag, field: &str) -> EvalResult<f64> {
    let value = inputs.get_f64(field)?;
    if value < 0.0 {
        return Err(EvalError::domain(format!("{field} must not be negative")));
    }
    Ok(value)
}

pub struct CarbonFootprint;

// tons of CO2: 0.4 kg per kWh, 5.3 kg per therm, 404 g per mile,
// 0.9 t per flight
const TONS_PER_KWH: f64 = 0.0004;
const TONS_PER_THERM: f64 = 0.0053;
const TONS_PER_MILE: f64 = 0.000_404;
const TONS_PER_FLIGHT: f64 = 0.9;

impl Formula for CarbonFootprint {
    fn id(&self) -> &'static str {
        "carbon_footprint"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let electricity = non_negative(inputs, "electricity")?;
        let gas = non_negative(inputs, "gas")?;
        let car_miles = non_negative(inputs, "car_miles")?;
        let flights = non_negative(inputs, "flights")?;
        // electricity, gas and driving are monthly; flights are per year
        let tons = electricity * 12.0 * TONS_PER_KWH
            + gas * 12.0 * TONS_PER_THERM
            + car_miles * 12.0 * TONS_PER_MILE
            + flights * TONS_PER_FLIGHT;
        Ok(format!("Carbon Footprint: {tons:.2} tons CO2 per year"))
    }
}

pub struct TreeOffset;

/// A mature tree absorbs roughly this much CO2 in a year.
const KG_PER_TREE: f64 = 21.0;

impl Formula for TreeOffset {
    fn id(&self) -> &'static str {
        "tree_offset"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let co2 = non_negative(inputs, "co2")?;
        let trees = (co2 / KG_PER_TREE).ceil() as i64;
        Ok(format!("Trees Needed: {trees} trees per year"))
    }
}

pub struct Recycling;

// kg CO2 saved per kg recycled
const PAPER_FACTOR: f64 = 0.9;
const PLASTIC_FACTOR: f64 = 1.5;
const GLASS_FACTOR: f64 = 0.3;
const METAL_FACTOR: f64 = 4.0;

impl Formula for Recycling {
    fn id(&self) -> &'static str {
        "recycling"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let paper = non_negative(inputs, "paper")?;
        let plastic = non_negative(inputs, "plastic")?;
        let glass = non_negative(inputs, "glass")?;
        let metal = non_negative(inputs, "metal")?;
        let saved = paper * PAPER_FACTOR
            + plastic * PLASTIC_FACTOR
            + glass * GLASS_FACTOR
            + metal * METAL_FACTOR;
        Ok(format!("CO2 Saved: {saved:.2} kg"))
    }
}

pub struct ElectricityCost;

impl Formula for ElectricityCost {
    fn id(&self) -> &'static str {
        "electricity_cost"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let watts = non_negative(inputs, "watts")?;
        let hours = non_negative(inputs, "hours")?;
        let rate = non_negative(inputs, "rate")?;
        let kwh = watts * hours / 1000.0;
        Ok(format!("Energy: {kwh:.2} kWh, Cost: ${:.2}", kwh * rate))
    }
}
