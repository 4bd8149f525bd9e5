use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EvalError, EvalResult};

/// Per-call bag of raw string inputs keyed by field name.
///
/// Constructed from user-supplied form or JSON data and discarded when
/// the call returns. All typed access goes through the extraction
/// helpers so every formula reports missing and malformed fields the
/// same way.
#[derive(Debug, Clone, Default)]
pub struct InputBag {
    fields: HashMap<String, String>,
}

impl InputBag {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Convenience constructor for literal field lists.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    /// The trimmed raw value, with absent and blank fields collapsed to
    /// `None`.
    fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    pub fn get_str(&self, name: &str) -> EvalResult<&str> {
        self.raw(name).ok_or_else(|| EvalError::MissingField(name.to_string()))
    }

    pub fn get_f64(&self, name: &str) -> EvalResult<f64> {
        let raw = self.get_str(name)?;
        parse_f64(name, raw)
    }

    /// `None` when the field is absent or blank, an error only when a
    /// value is present but malformed.
    pub fn optional_f64(&self, name: &str) -> EvalResult<Option<f64>> {
        match self.raw(name) {
            Some(raw) => parse_f64(name, raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn get_i64(&self, name: &str) -> EvalResult<i64> {
        let raw = self.get_str(name)?;
        if let Ok(v) = raw.parse::<i64>() {
            return Ok(v);
        }
        // distinguish "3.5" (a number, but not whole) from garbage
        match raw.parse::<f64>() {
            Ok(_) => Err(EvalError::NotAnInteger(name.to_string())),
            Err(_) => Err(EvalError::NotANumber(name.to_string())),
        }
    }

    pub fn get_date(&self, name: &str) -> EvalResult<NaiveDate> {
        let raw = self.get_str(name)?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| EvalError::BadDate(name.to_string()))
    }

    pub fn get_time(&self, name: &str) -> EvalResult<NaiveTime> {
        let raw = self.get_str(name)?;
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map_err(|_| EvalError::BadTime(name.to_string()))
    }

    /// Parses a comma- or whitespace-delimited list of numbers from a
    /// single text field.
    pub fn get_numbers(&self, name: &str) -> EvalResult<Vec<f64>> {
        let raw = self.get_str(name)?;
        let mut values = Vec::new();
        for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            values.push(parse_f64(name, token)?);
        }
        if values.is_empty() {
            return Err(EvalError::MissingField(name.to_string()));
        }
        Ok(values)
    }
}

fn parse_f64(name: &str, raw: &str) -> EvalResult<f64> {
    match raw.parse::<f64>() {
        // "inf" and "nan" parse successfully but are not usable inputs
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(EvalError::NotANumber(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_missing() {
        let bag = InputBag::from_pairs(&[("weight", "   ")]);
        assert_eq!(bag.get_f64("weight"), Err(EvalError::MissingField("weight".into())));
    }

    #[test]
    fn integer_extraction_distinguishes_fractions_from_garbage() {
        let bag = InputBag::from_pairs(&[("n", "3.5"), ("m", "abc")]);
        assert_eq!(bag.get_i64("n"), Err(EvalError::NotAnInteger("n".into())));
        assert_eq!(bag.get_i64("m"), Err(EvalError::NotANumber("m".into())));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let bag = InputBag::from_pairs(&[("x", "inf"), ("y", "NaN")]);
        assert_eq!(bag.get_f64("x"), Err(EvalError::NotANumber("x".into())));
        assert_eq!(bag.get_f64("y"), Err(EvalError::NotANumber("y".into())));
    }

    #[test]
    fn number_lists_accept_mixed_delimiters() {
        let bag = InputBag::from_pairs(&[("numbers", "1, 2\n3  4.5")]);
        assert_eq!(bag.get_numbers("numbers").unwrap(), vec![1.0, 2.0, 3.0, 4.5]);
    }
}
