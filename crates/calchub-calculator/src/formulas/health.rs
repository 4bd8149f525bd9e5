//! Health and fitness calculators. Weights are kilograms, lengths are
//! centimeters throughout.

use std::sync::Arc;

use chrono::Duration;

use crate::clock::Clock;
use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn gender(inputs: &InputBag) -> EvalResult<bool> {
    match inputs.get_str("gender")?.to_lowercase().as_str() {
        "male" | "m" => Ok(true),
        "female" | "f" => Ok(false),
        _ => Err(EvalError::domain("gender must be 'male' or 'female'")),
    }
}

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

pub struct Bmi;

impl Formula for Bmi {
    fn id(&self) -> &'static str {
        "bmi"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let height = positive(inputs, "height")?;
        let meters = height / 100.0;
        let bmi = weight / (meters * meters);
        let band = if bmi < 18.5 {
            "Underweight"
        } else if bmi < 25.0 {
            "Normal"
        } else if bmi < 30.0 {
            "Overweight"
        } else {
            "Obese"
        };
        Ok(format!("BMI: {bmi:.2} ({band})"))
    }
}

pub struct Bmr;

impl Formula for Bmr {
    fn id(&self) -> &'static str {
        "bmr"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let height = positive(inputs, "height")?;
        let age = inputs.get_i64("age")?;
        if !(1..=120).contains(&age) {
            return Err(EvalError::domain("age must be between 1 and 120"));
        }
        let male = gender(inputs)?;
        // Mifflin-St Jeor
        let base = 10.0 * weight + 6.25 * height - 5.0 * age as f64;
        let bmr = if male { base + 5.0 } else { base - 161.0 };
        Ok(format!("BMR: {bmr:.2} calories/day"))
    }
}

pub struct BodyFat;

impl Formula for BodyFat {
    fn id(&self) -> &'static str {
        "body_fat"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let waist = positive(inputs, "waist")?;
        let height = positive(inputs, "height")?;
        let male = gender(inputs)?;
        // relative fat mass estimate
        let percent = if male {
            64.0 - 20.0 * height / waist
        } else {
            76.0 - 20.0 * height / waist
        };
        if !(0.0..=75.0).contains(&percent) {
            return Err(EvalError::domain("measurements are outside the supported range"));
        }
        let fat_mass = weight * percent / 100.0;
        Ok(format!("Body Fat: {percent:.2}% ({fat_mass:.2} kg fat mass)"))
    }
}

pub struct IdealWeight;

impl Formula for IdealWeight {
    fn id(&self) -> &'static str {
        "ideal_weight"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let height = positive(inputs, "height")?;
        let male = gender(inputs)?;
        // Devine formula over height in inches
        let inches = height / 2.54;
        let ideal = if male { 50.0 + 2.3 * (inches - 60.0) } else { 45.5 + 2.3 * (inches - 60.0) };
        if ideal <= 0.0 {
            return Err(EvalError::domain("height is below the supported range"));
        }
        Ok(format!("Ideal Weight: {ideal:.2} kg"))
    }
}

pub struct CaloriesBurned;

impl Formula for CaloriesBurned {
    fn id(&self) -> &'static str {
        "calories_burned"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let duration = positive(inputs, "duration")?;
        let met = match inputs.get_str("activity")?.to_lowercase().as_str() {
            "light" => 3.0,
            "moderate" => 5.0,
            "vigorous" => 8.0,
            _ => {
                return Err(EvalError::domain(
                    "activity must be 'light', 'moderate' or 'vigorous'",
                ));
            }
        };
        let calories = met * 3.5 * weight / 200.0 * duration;
        Ok(format!("Calories Burned: {calories:.2} calories"))
    }
}

pub struct WaterIntake;

impl Formula for WaterIntake {
    fn id(&self) -> &'static str {
        "water_intake"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let activity = non_negative(inputs, "activity")?;
        // 33 ml per kg plus 350 ml per half hour of exercise
        let liters = weight * 0.033 + activity / 30.0 * 0.35;
        Ok(format!("Daily Water Intake: {liters:.2} liters"))
    }
}

pub struct ProteinNeeds;

impl Formula for ProteinNeeds {
    fn id(&self) -> &'static str {
        "protein_needs"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let per_kg = match inputs.get_str("activity")?.to_lowercase().as_str() {
            "sedentary" => 0.8,
            "moderate" => 1.2,
            "active" => 1.6,
            "athlete" => 2.0,
            _ => {
                return Err(EvalError::domain(
                    "activity must be 'sedentary', 'moderate', 'active' or 'athlete'",
                ));
            }
        };
        Ok(format!("Daily Protein: {:.1} grams", weight * per_kg))
    }
}

pub struct CarbsNeeds;

impl Formula for CarbsNeeds {
    fn id(&self) -> &'static str {
        "carbs_needs"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let weight = positive(inputs, "weight")?;
        let per_kg = match inputs.get_str("activity")?.to_lowercase().as_str() {
            "sedentary" => 3.0,
            "moderate" => 5.0,
            "active" => 6.0,
            "athlete" => 8.0,
            _ => {
                return Err(EvalError::domain(
                    "activity must be 'sedentary', 'moderate', 'active' or 'athlete'",
                ));
            }
        };
        Ok(format!("Daily Carbohydrates: {:.1} grams", weight * per_kg))
    }
}

pub struct FiberNeeds;

impl Formula for FiberNeeds {
    fn id(&self) -> &'static str {
        "fiber_needs"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let age = inputs.get_i64("age")?;
        if !(1..=120).contains(&age) {
            return Err(EvalError::domain("age must be between 1 and 120"));
        }
        let male = gender(inputs)?;
        let grams = match (male, age > 50) {
            (true, false) => 38,
            (true, true) => 30,
            (false, false) => 25,
            (false, true) => 21,
        };
        Ok(format!("Daily Fiber: {grams} grams"))
    }
}

pub struct HeartRate;

impl Formula for HeartRate {
    fn id(&self) -> &'static str {
        "heart_rate"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let age = inputs.get_i64("age")?;
        if !(1..=120).contains(&age) {
            return Err(EvalError::domain("age must be between 1 and 120"));
        }
        let max = 220 - age;
        let lower = (max as f64 * 0.50).round() as i64;
        let upper = (max as f64 * 0.85).round() as i64;
        Ok(format!("Maximum Heart Rate: {max} bpm, Target Zone: {lower}-{upper} bpm"))
    }
}

pub struct Pregnancy {
    clock: Arc<dyn Clock>,
}

impl Pregnancy {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Formula for Pregnancy {
    fn id(&self) -> &'static str {
        "pregnancy"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let lmp = inputs.get_date("lmp")?;
        let today = self.clock.today();
        if lmp > today {
            return Err(EvalError::domain("the last menstrual period must not be in the future"));
        }
        let due = lmp
            .checked_add_signed(Duration::days(280))
            .ok_or_else(|| EvalError::domain("resulting date is out of range"))?;
        let weeks = (today - lmp).num_days() / 7;
        Ok(format!("Estimated Due Date: {} (week {weeks})", due.format("%Y-%m-%d")))
    }
}

pub struct AlcoholUnits;

impl Formula for AlcoholUnits {
    fn id(&self) -> &'static str {
        "alcohol_units"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let volume = positive(inputs, "volume")?;
        let abv = inputs.get_f64("abv")?;
        if !(0.0..=100.0).contains(&abv) {
            return Err(EvalError::domain("abv must be between 0 and 100"));
        }
        let units = volume * abv / 1000.0;
        Ok(format!("Alcohol Units: {units:.2}"))
    }
}
