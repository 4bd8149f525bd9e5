#![deny(warnings)]
//! Static calculator catalog for the Calchub calculation service.
//!
//! The catalog drives listing and navigation pages and doubles as the
//! source of truth for the identifiers the dispatcher must recognize. It
//! is embedded at compile time, parsed once, and immutable for the life
//! of the process.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One entry in the calculator catalog.
///
/// `id` is the stable routing key; it is unique across the catalog and
/// matches the identifier accepted by the dispatcher. `category` is a
/// grouping label shared by several calculators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculatorDescriptor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

static CATALOG: LazyLock<Vec<CalculatorDescriptor>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/calculators.json"))
        .expect("embedded calculator catalog must be valid JSON")
});

/// All calculators, in catalog order.
pub fn catalog() -> &'static [CalculatorDescriptor] {
    &CATALOG
}

/// Look up a single descriptor by its identifier.
pub fn find(id: &str) -> Option<&'static CalculatorDescriptor> {
    CATALOG.iter().find(|c| c.id == id)
}

/// Catalog grouped by category, preserving first-appearance order.
pub fn categories() -> Vec<(&'static str, Vec<&'static CalculatorDescriptor>)> {
    let mut groups: Vec<(&'static str, Vec<&'static CalculatorDescriptor>)> = Vec::new();
    for desc in CATALOG.iter() {
        match groups.iter_mut().find(|(name, _)| *name == desc.category) {
            Some((_, members)) => members.push(desc),
            None => groups.push((desc.category.as_str(), vec![desc])),
        }
    }
    groups
}
