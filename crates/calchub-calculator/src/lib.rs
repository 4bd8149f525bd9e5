#![deny(warnings)]
//! The formula registry and dispatcher for the Calchub calculation
//! service.
//!
//! Each calculator is a [`Formula`]: a pure, independently testable
//! mapping from a bag of raw string inputs to one formatted result
//! line. The [`Dispatcher`] owns the registry and converts internal
//! [`EvalError`]s to the `Error: ...` display strings callers expect;
//! nothing in this crate surfaces a panic or an `Err` past that
//! boundary. Environmental concerns (today's date, randomness) are
//! injected capabilities so every other formula stays idempotent.

pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod formula;
pub mod formulas;
pub mod inputs;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::{Dispatcher, NOT_IMPLEMENTED};
pub use error::{EvalError, EvalResult};
pub use formula::Formula;
pub use inputs::InputBag;
pub use random::{FixedSource, RandomSource, ThreadRngSource};
