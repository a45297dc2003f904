use crate::complex::Complex;
use crate::error::CoreError;

/// The classification of a single sample.
///
/// Only the escape iteration is kept; the palette in `fractals-render`
/// turns it into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    /// The orbit norm first reached the escape radius at iteration `k`,
    /// counted from zero before the update of that iteration was applied.
    Escaped(u32),

    /// The orbit stayed under the escape radius for the whole budget.
    Bounded,
}

impl EscapeResult {
    #[inline]
    pub fn is_escaped(&self) -> bool {
        matches!(self, Self::Escaped(_))
    }
}

/// Parameters controlling escape-time iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeParams {
    /// Number of iterations before a sample is declared bounded.
    pub iteration_budget: u32,

    /// Bailout radius: the orbit has escaped once `|z| >= escape_radius`.
    pub escape_radius: f64,
}

impl EscapeParams {
    pub const DEFAULT_ITERATION_BUDGET: u32 = 50;
    pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

    pub fn new(iteration_budget: u32, escape_radius: f64) -> crate::Result<Self> {
        if iteration_budget < 1 {
            return Err(CoreError::InvalidIterationBudget(iteration_budget));
        }
        if escape_radius <= 0.0 || !escape_radius.is_finite() {
            return Err(CoreError::InvalidEscapeRadius(escape_radius));
        }
        Ok(Self {
            iteration_budget,
            escape_radius,
        })
    }

    /// Return a copy with a different iteration budget.
    pub fn with_iteration_budget(self, iteration_budget: u32) -> Self {
        Self {
            iteration_budget,
            ..self
        }
    }
}

impl Default for EscapeParams {
    fn default() -> Self {
        Self {
            iteration_budget: Self::DEFAULT_ITERATION_BUDGET,
            escape_radius: Self::DEFAULT_ESCAPE_RADIUS,
        }
    }
}

/// Trait implemented by escape-time fractals.
///
/// Designed for **static dispatch**: the scanner is generic over
/// `F: EscapeTime` so the hot loop can be inlined.
pub trait EscapeTime {
    /// Classify the orbit seeded at `seed`.
    ///
    /// Must be a pure function of `seed` and the fractal's own fields.
    fn evaluate(&self, seed: Complex) -> EscapeResult;
}
