//! Mechanics calculators in SI units.

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

const GRAVITY: f64 = 9.81;

fn positive(inputs: &InputBag, field: &str) -> EvalResult<f64> {
    let value = inputs.get_f64(field)?;
    if value <= 0.0 {
        return Err(EvalError::domain(format!("{field} must be greater than zero")));
    }
    Ok(value)
}

pub struct Speed;

impl Formula for Speed {
    fn id(&self) -> &'static str {
        "speed"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let distance = inputs.get_f64("distance")?;
        if distance < 0.0 {
            return Err(EvalError::domain("distance must not be negative"));
        }
        let time = positive(inputs, "time")?;
        Ok(format!("Speed: {:.2} km/h", distance / time))
    }
}

pub struct Acceleration;

impl Formula for Acceleration {
    fn id(&self) -> &'static str {
        "acceleration"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let initial = inputs.get_f64("initial_velocity")?;
        let final_velocity = inputs.get_f64("final_velocity")?;
        let time = positive(inputs, "time")?;
        Ok(format!("Acceleration: {:.2} m/s²", (final_velocity - initial) / time))
    }
}

pub struct Force;

impl Formula for Force {
    fn id(&self) -> &'static str {
        "force"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let mass = positive(inputs, "mass")?;
        let acceleration = inputs.get_f64("acceleration")?;
        Ok(format!("Force: {:.2} N", mass * acceleration))
    }
}

pub struct Momentum;

impl Formula for Momentum {
    fn id(&self) -> &'static str {
        "momentum"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let mass = positive(inputs, "mass")?;
        let velocity = inputs.get_f64("velocity")?;
        Ok(format!("Momentum: {:.2} kg·m/s", mass * velocity))
    }
}

pub struct KineticEnergy;

impl Formula for KineticEnergy {
    fn id(&self) -> &'static str {
        "kinetic_energy"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let mass = positive(inputs, "mass")?;
        let velocity = inputs.get_f64("velocity")?;
        Ok(format!("Kinetic Energy: {:.2} J", 0.5 * mass * velocity * velocity))
    }
}

pub struct PotentialEnergy;

impl Formula for PotentialEnergy {
    fn id(&self) -> &'static str {
        "potential_energy"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let mass = positive(inputs, "mass")?;
        let height = inputs.get_f64("height")?;
        Ok(format!("Potential Energy: {:.2} J", mass * GRAVITY * height))
    }
}

pub struct Work;

impl Formula for Work {
    fn id(&self) -> &'static str {
        "work"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let force = inputs.get_f64("force")?;
        let distance = inputs.get_f64("distance")?;
        Ok(format!("Work: {:.2} J", force * distance))
    }
}

pub struct PowerPhysics;

impl Formula for PowerPhysics {
    fn id(&self) -> &'static str {
        "power_physics"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let work = inputs.get_f64("work")?;
        let time = positive(inputs, "time")?;
        Ok(format!("Power: {:.2} W", work / time))
    }
}

pub struct PressurePhysics;

impl Formula for PressurePhysics {
    fn id(&self) -> &'static str {
        "pressure_physics"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let force = inputs.get_f64("force")?;
        let area = positive(inputs, "area")?;
        Ok(format!("Pressure: {:.2} Pa", force / area))
    }
}

pub struct Density;

impl Formula for Density {
    fn id(&self) -> &'static str {
        "density"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let mass = positive(inputs, "mass")?;
        let volume = positive(inputs, "volume")?;
        Ok(format!("Density: {:.2} kg/m³", mass / volume))
    }
}
