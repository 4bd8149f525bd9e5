//! Home project estimators. Dimensions are meters unless a field says
//! otherwise; material counts round up to whole units.

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

pub struct PaintNeeded;

impl Formula for PaintNeeded {
    fn id(&self) -> &'static str {
        "paint_needed"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let length = positive(inputs, "length")?;
        let width = positive(inputs, "width")?;
        let height = positive(inputs, "height")?;
        let coats = inputs.get_i64("coats")?;
        if !(1..=10).contains(&coats) {
            return Err(EvalError::domain("coats must be between 1 and 10"));
        }
        let coverage = positive(inputs, "coverage")?;
        let wall_area = 2.0 * (length + width) * height;
        let liters = wall_area * coats as f64 / coverage;
        Ok(format!("Paint Needed: {liters:.2} liters for {wall_area:.2} square meters of wall"))
    }
}

pub struct Flooring;

impl Formula for Flooring {
    fn id(&self) -> &'static str {
        "flooring"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let length = positive(inputs, "length")?;
        let width = positive(inputs, "width")?;
        Ok(format!("Flooring Needed: {:.2} square meters", length * width))
    }
}

pub struct TileNeeded;

impl Formula for TileNeeded {
    fn id(&self) -> &'static str {
        "tile_needed"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let length = positive(inputs, "length")?;
        let width = positive(inputs, "width")?;
        let tile_size = positive(inputs, "tile_size")?;
        let tiles = (length * width / tile_size).ceil() as i64;
        Ok(format!("Tiles Needed: {tiles} tiles"))
    }
}

pub struct Fence;

impl Formula for Fence {
    fn id(&self) -> &'static str {
        "fence"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let length = positive(inputs, "length")?;
        let width = positive(inputs, "width")?;
        Ok(format!("Fencing Needed: {:.2} meters", 2.0 * (length + width)))
    }
}

pub struct Concrete;

impl Formula for Concrete {
    fn id(&self) -> &'static str {
        "concrete"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let length = positive(inputs, "length")?;
        let width = positive(inputs, "width")?;
        let depth = positive(inputs, "depth")?;
        Ok(format!("Concrete Needed: {:.2} cubic meters", length * width * depth))
    }
}

pub struct Roofing;

impl Formula for Roofing {
    fn id(&self) -> &'static str {
        "roofing"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let length = positive(inputs, "length")?;
        let width = positive(inputs, "width")?;
        let pitch = inputs.get_f64("pitch")?;
        if !(0.0..=24.0).contains(&pitch) {
            return Err(EvalError::domain("pitch must be between 0 and 24 (rise per 12 run)"));
        }
        // slope factor from rise-per-12 pitch
        let factor = (1.0 + (pitch / 12.0).powi(2)).sqrt();
        Ok(format!("Roofing Area: {:.2} square meters", length * width * factor))
    }
}

pub struct SolarPanels;

/// Sizing assumes a 300 W panel and four peak-sun hours per day.
const PANEL_DAILY_KWH: f64 = 1.2;

impl Formula for SolarPanels {
    fn id(&self) -> &'static str {
        "solar_panels"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let monthly_bill = positive(inputs, "monthly_bill")?;
        let rate = positive(inputs, "rate")?;
        let monthly_kwh = monthly_bill / rate;
        let daily_kwh = monthly_kwh / 30.0;
        let panels = (daily_kwh / PANEL_DAILY_KWH).ceil() as i64;
        Ok(format!("Panels Needed: {panels} panels (about {daily_kwh:.1} kWh per day)"))
    }
}
