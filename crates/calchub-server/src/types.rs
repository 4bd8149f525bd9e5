//! Wire types for the calculation endpoint.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// `POST /calculate` request body: a calculator identifier plus the raw
/// field values exactly as the form submitted them.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub calc_id: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub result: String,
}
