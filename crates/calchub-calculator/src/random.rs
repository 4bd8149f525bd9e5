use rand::Rng;

/// Source of uniform random integers.
///
/// The one intentionally non-deterministic calculator draws through this
/// capability, so deterministic tests can substitute a fixed source.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in the inclusive `[min, max]` range.
    /// Callers guarantee `min <= max`.
    fn pick(&self, min: i64, max: i64) -> i64;
}

/// Thread-local RNG, the production source.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Returns its configured value clamped into the requested range.
#[derive(Debug)]
pub struct FixedSource(pub i64);

impl RandomSource for FixedSource {
    fn pick(&self, min: i64, max: i64) -> i64 {
        self.0.clamp(min, max)
    }
}
