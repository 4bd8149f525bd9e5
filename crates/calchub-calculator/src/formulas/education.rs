//! Grading calculators. Grade points are numeric: the 4.0 scale for GPA
//! and the 10-point scale for CGPA.

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn letter(percent: f64) -> &'static str {
    if percent >= 90.0 {
        "A"
    } else if percent >= 80.0 {
        "B"
    } else if percent >= 70.0 {
        "C"
    } else if percent >= 60.0 {
        "D"
    } else {
        "F"
    }
}

pub struct Gpa;

impl Formula for Gpa {
    fn id(&self) -> &'static str {
        "gpa"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let points = inputs.get_numbers("points")?;
        let credits = inputs.get_numbers("credits")?;
        if points.len() != credits.len() {
            return Err(EvalError::domain("points and credits must have the same number of values"));
        }
        for &point in &points {
            if !(0.0..=4.0).contains(&point) {
                return Err(EvalError::domain("grade points must be between 0 and 4"));
            }
        }
        for &credit in &credits {
            if credit <= 0.0 {
                return Err(EvalError::domain("credits must be greater than zero"));
            }
        }
        let weighted: f64 = points.iter().zip(&credits).map(|(p, c)| p * c).sum();
        let total: f64 = credits.iter().sum();
        Ok(format!("GPA: {:.2}", weighted / total))
    }
}

pub struct Cgpa;

impl Formula for Cgpa {
    fn id(&self) -> &'static str {
        "cgpa"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let grades = inputs.get_numbers("grades")?;
        for &grade in &grades {
            if !(0.0..=10.0).contains(&grade) {
                return Err(EvalError::domain("grade points must be between 0 and 10"));
            }
        }
        let cgpa = grades.iter().sum::<f64>() / grades.len() as f64;
        Ok(format!("CGPA: {cgpa:.2}"))
    }
}

pub struct Grade;

impl Formula for Grade {
    fn id(&self) -> &'static str {
        "grade"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let score = inputs.get_f64("score")?;
        let total = inputs.get_f64("total")?;
        if total <= 0.0 {
            return Err(EvalError::domain("total must be greater than zero"));
        }
        if score < 0.0 || score > total {
            return Err(EvalError::domain("score must be between 0 and the total"));
        }
        let percent = score / total * 100.0;
        Ok(format!("Grade: {percent:.2}% ({})", letter(percent)))
    }
}

pub struct FinalGrade;

impl Formula for FinalGrade {
    fn id(&self) -> &'static str {
        "final_grade"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let current = inputs.get_f64("current_grade")?;
        let desired = inputs.get_f64("desired_grade")?;
        for (name, value) in [("current_grade", current), ("desired_grade", desired)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EvalError::domain(format!("{name} must be between 0 and 100")));
            }
        }
        let weight = inputs.get_f64("final_weight")?;
        if !(weight > 0.0 && weight <= 100.0) {
            return Err(EvalError::domain("final_weight must be between 0 and 100"));
        }
        let fraction = weight / 100.0;
        let needed = (desired - current * (1.0 - fraction)) / fraction;
        let note = if needed > 100.0 { " (may not be achievable)" } else { "" };
        Ok(format!("Required Final Exam Score: {needed:.2}%{note}"))
    }
}

pub struct TestScore;

impl Formula for TestScore {
    fn id(&self) -> &'static str {
        "test_score"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let correct = inputs.get_i64("correct")?;
        let total = inputs.get_i64("total")?;
        if total <= 0 {
            return Err(EvalError::domain("total must be greater than zero"));
        }
        if correct < 0 || correct > total {
            return Err(EvalError::domain("correct must be between 0 and the total"));
        }
        let percent = correct as f64 / total as f64 * 100.0;
        Ok(format!("Test Score: {percent:.2}% ({})", letter(percent)))
    }
}
