use crate::error::EvalResult;
use crate::inputs::InputBag;

/// A single named calculator: a pure mapping from a bag of raw inputs to
/// one formatted result line.
///
/// Implementations are stateless and thread-safe. Anything environmental
/// (today's date, randomness) is injected at construction rather than
/// read inside `apply`, so every formula except the random one is
/// idempotent for identical inputs.
pub trait Formula: Send + Sync {
    /// The stable identifier used to select this calculator.
    fn id(&self) -> &'static str;

    /// Validates this formula's required fields and computes the result.
    ///
    /// Each formula does its own presence, parse, and range validation
    /// up front; the dispatcher's conversion of `EvalError` to a display
    /// string is a safety net, not the primary mechanism.
    fn apply(&self, inputs: &InputBag) -> EvalResult<String>;
}
