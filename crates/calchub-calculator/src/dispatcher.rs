use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::formula::Formula;
use crate::formulas;
use crate::inputs::InputBag;
use crate::random::{RandomSource, ThreadRngSource};

/// Fixed reply for identifiers with no registered formula. Deliberately
/// not an `Error:`-prefixed message.
pub const NOT_IMPLEMENTED: &str = "Calculator not yet implemented";

/// Holds every registered formula and routes evaluation requests.
///
/// Read-only after construction, so a single instance can serve
/// concurrent callers without locking.
pub struct Dispatcher {
    formulas: HashMap<&'static str, Box<dyn Formula>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Registry wired with the system clock and thread-local RNG.
    pub fn new() -> Self {
        Self::with_env(Arc::new(SystemClock), Arc::new(ThreadRngSource))
    }

    /// Registry with injected environmental capabilities, for callers
    /// (and tests) that need deterministic dates or randomness.
    pub fn with_env(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        let mut dispatcher = Self { formulas: HashMap::new() };
        for formula in formulas::all(clock, random) {
            dispatcher.register(formula);
        }
        dispatcher
    }

    fn register(&mut self, formula: Box<dyn Formula>) {
        let id = formula.id();
        let displaced = self.formulas.insert(id, formula);
        debug_assert!(displaced.is_none(), "duplicate formula id: {id}");
    }

    /// Identifiers of every registered formula, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formulas.keys().copied()
    }

    /// Evaluates one calculator against a bag of raw inputs.
    ///
    /// Never panics and never surfaces an error to the caller: formula
    /// failures render as `Error: ...` result strings, and unrecognized
    /// identifiers get the fixed fallback message.
    pub fn evaluate(&self, calc_id: &str, inputs: &InputBag) -> String {
        match self.formulas.get(calc_id) {
            Some(formula) => match formula.apply(inputs) {
                Ok(message) => message,
                Err(err) => {
                    debug!(calc_id, %err, "formula rejected inputs");
                    err.to_string()
                }
            },
            None => {
                warn!(calc_id, "unknown calculator id");
                NOT_IMPLEMENTED.to_string()
            }
        }
    }
}
