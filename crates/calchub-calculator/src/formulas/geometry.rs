//! Plane and solid geometry calculators. All dimensions must be
//! strictly positive.

use std::f64::consts::PI;

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn dimension(inputs: &InputBag, field: &str) -> EvalResult<f64> {
    let value = inputs.get_f64(field)?;
    if value <= 0.0 {
        return Err(EvalError::domain(format!("{field} must be greater than zero")));
    }
    Ok(value)
}

pub struct AreaCircle;

impl Formula for AreaCircle {
    fn id(&self) -> &'static str {
        "area_circle"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let radius = dimension(inputs, "radius")?;
        Ok(format!("Area of Circle: {:.2} square units", PI * radius * radius))
    }
}

pub struct AreaRectangle;

impl Formula for AreaRectangle {
    fn id(&self) -> &'static str {
        "area_rectangle"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let length = dimension(inputs, "length")?;
        let width = dimension(inputs, "width")?;
        Ok(format!("Area of Rectangle: {:.2} square units", length * width))
    }
}

pub struct AreaSquare;

impl Formula for AreaSquare {
    fn id(&self) -> &'static str {
        "area_square"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let side = dimension(inputs, "side")?;
        Ok(format!("Area of Square: {:.2} square units", side * side))
    }
}

pub struct AreaTriangle;

impl Formula for AreaTriangle {
    fn id(&self) -> &'static str {
        "area_triangle"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let base = dimension(inputs, "base")?;
        let height = dimension(inputs, "height")?;
        Ok(format!("Area of Triangle: {:.2} square units", 0.5 * base * height))
    }
}

pub struct AreaTrapezoid;

impl Formula for AreaTrapezoid {
    fn id(&self) -> &'static str {
        "area_trapezoid"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let base1 = dimension(inputs, "base1")?;
        let base2 = dimension(inputs, "base2")?;
        let height = dimension(inputs, "height")?;
        Ok(format!("Area of Trapezoid: {:.2} square units", (base1 + base2) / 2.0 * height))
    }
}

pub struct VolumeCube;

impl Formula for VolumeCube {
    fn id(&self) -> &'static str {
        "volume_cube"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let side = dimension(inputs, "side")?;
        Ok(format!("Volume of Cube: {:.2} cubic units", side.powi(3)))
    }
}

pub struct VolumeSphere;

impl Formula for VolumeSphere {
    fn id(&self) -> &'static str {
        "volume_sphere"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let radius = dimension(inputs, "radius")?;
        Ok(format!("Volume of Sphere: {:.2} cubic units", 4.0 / 3.0 * PI * radius.powi(3)))
    }
}

pub struct VolumeCylinder;

impl Formula for VolumeCylinder {
    fn id(&self) -> &'static str {
        "volume_cylinder"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let radius = dimension(inputs, "radius")?;
        let height = dimension(inputs, "height")?;
        Ok(format!("Volume of Cylinder: {:.2} cubic units", PI * radius * radius * height))
    }
}
