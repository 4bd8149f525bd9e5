//! Descriptive statistics over a delimited list of numbers.
//!
//! Variance and standard deviation are the population forms.

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_variance(values: &[f64]) -> f64 {
    let mean = mean_of(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

fn at_least(values: &[f64], count: usize) -> EvalResult<()> {
    if values.len() < count {
        return Err(EvalError::domain(format!("please provide at least {count} numbers")));
    }
    Ok(())
}

pub struct Mean;

impl Formula for Mean {
    fn id(&self) -> &'static str {
        "mean"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let values = inputs.get_numbers("numbers")?;
        Ok(format!("Mean: {:.2}", mean_of(&values)))
    }
}

pub struct Median;

impl Formula for Median {
    fn id(&self) -> &'static str {
        "median"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let mut values = inputs.get_numbers("numbers")?;
        values.sort_by(|a, b| a.partial_cmp(b).expect("inputs are finite"));
        let middle = values.len() / 2;
        let median = if values.len() % 2 == 1 {
            values[middle]
        } else {
            (values[middle - 1] + values[middle]) / 2.0
        };
        Ok(format!("Median: {median:.2}"))
    }
}

pub struct Mode;

impl Formula for Mode {
    fn id(&self) -> &'static str {
        "mode"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let values = inputs.get_numbers("numbers")?;
        let mut counts: Vec<(f64, usize)> = Vec::new();
        for &value in &values {
            match counts.iter_mut().find(|(seen, _)| *seen == value) {
                Some((_, count)) => *count += 1,
                None => counts.push((value, 1)),
            }
        }
        let highest = counts.iter().map(|&(_, count)| count).max().expect("list is non-empty");
        if highest == 1 {
            return Ok("No mode (each value appears once)".to_string());
        }
        // every value tied for the highest frequency, ascending
        let mut modes: Vec<f64> = counts
            .iter()
            .filter(|&&(_, count)| count == highest)
            .map(|&(value, _)| value)
            .collect();
        modes.sort_by(|a, b| a.partial_cmp(b).expect("inputs are finite"));
        let listed = modes.iter().map(|v| format!("{v}")).collect::<Vec<_>>().join(", ");
        Ok(format!("Mode: {listed} (appears {highest} times)"))
    }
}

pub struct Variance;

impl Formula for Variance {
    fn id(&self) -> &'static str {
        "variance"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let values = inputs.get_numbers("numbers")?;
        at_least(&values, 2)?;
        Ok(format!("Variance: {:.2}", population_variance(&values)))
    }
}

pub struct StandardDeviation;

impl Formula for StandardDeviation {
    fn id(&self) -> &'static str {
        "standard_deviation"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let values = inputs.get_numbers("numbers")?;
        at_least(&values, 2)?;
        Ok(format!("Standard Deviation: {:.2}", population_variance(&values).sqrt()))
    }
}

pub struct Correlation;

impl Formula for Correlation {
    fn id(&self) -> &'static str {
        "correlation"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let xs = inputs.get_numbers("x_values")?;
        let ys = inputs.get_numbers("y_values")?;
        if xs.len() != ys.len() {
            return Err(EvalError::domain("both lists must have the same number of values"));
        }
        at_least(&xs, 2)?;
        let mean_x = mean_of(&xs);
        let mean_y = mean_of(&ys);
        let covariance: f64 =
            xs.iter().zip(&ys).map(|(x, y)| (x - mean_x) * (y - mean_y)).sum();
        let spread_x: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum::<f64>().sqrt();
        let spread_y: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum::<f64>().sqrt();
        if spread_x == 0.0 || spread_y == 0.0 {
            return Err(EvalError::domain("correlation is undefined when a series is constant"));
        }
        Ok(format!("Correlation Coefficient: {:.4}", covariance / (spread_x * spread_y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_variance_of_known_list() {
        // mean 4, squared deviations 4+1+1+4 -> 2.5
        assert!((population_variance(&[2.0, 3.0, 5.0, 6.0]) - 2.5).abs() < 1e-12);
    }
}
