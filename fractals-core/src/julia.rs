use crate::complex::Complex;
use crate::fractal::{EscapeParams, EscapeResult, EscapeTime};

/// A Julia set: `z_{n+1} = z_n² + c`, where `c` is a fixed constant
/// and `z₀` is the sample point.
#[derive(Debug, Clone)]
pub struct Julia {
    params: EscapeParams,

    /// The fixed constant `c` that defines this Julia set.
    c: Complex,
}

impl Julia {
    pub fn new(c: Complex, params: EscapeParams) -> Self {
        Self { params, c }
    }

    /// The parameter shown before the first reseed: `c = 1.1 − 0.01i`.
    pub fn initial_c() -> Complex {
        Complex::new(1.1, -0.01)
    }

    /// The first `len` orbit values starting at `seed` (`z₀` included).
    ///
    /// Debug helper: the hot path never materialises the orbit.
    pub fn orbit(&self, seed: Complex, len: usize) -> Vec<Complex> {
        std::iter::successors(Some(seed), |&z| Some(z.square() + self.c))
            .take(len)
            .collect()
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self::new(Self::initial_c(), EscapeParams::default())
    }
}

impl EscapeTime for Julia {
    fn evaluate(&self, seed: Complex) -> EscapeResult {
        let radius = self.params.escape_radius;
        let mut z = seed;

        for i in 0..self.params.iteration_budget {
            // The norm is checked before the update, so `i` is the index
            // of the first orbit value on or outside the radius.
            if z.norm() >= radius {
                return EscapeResult::Escaped(i);
            }
            z = z.square() + self.c;
        }

        EscapeResult::Bounded
    }
}

/// Classify the seed `x + yi` under `z ← z² + c` with the default budget of 50.
#[inline]
pub fn evaluate(x: f64, y: f64, c: Complex) -> EscapeResult {
    Julia::new(c, EscapeParams::default()).evaluate(Complex::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_parameter_escapes_from_origin() {
        // 0 → 1.1−0.01i → 2.3099−0.032i, which is past the radius.
        assert_eq!(
            evaluate(0.0, 0.0, Julia::initial_c()),
            EscapeResult::Escaped(2)
        );
    }

    #[test]
    fn small_seed_is_bounded_for_zero_c() {
        assert_eq!(evaluate(0.1, 0.1, Complex::ZERO), EscapeResult::Bounded);
    }

    #[test]
    fn unit_circle_is_bounded_for_zero_c() {
        assert_eq!(evaluate(1.0, 0.0, Complex::ZERO), EscapeResult::Bounded);
        assert_eq!(evaluate(0.0, 1.0, Complex::ZERO), EscapeResult::Bounded);
    }

    #[test]
    fn far_point_escapes_immediately() {
        assert_eq!(evaluate(3.0, 0.0, Complex::ZERO), EscapeResult::Escaped(0));
    }

    #[test]
    fn norm_equal_to_radius_counts_as_escaped() {
        assert_eq!(evaluate(2.0, 0.0, Complex::ZERO), EscapeResult::Escaped(0));
        // 0 → −2, whose norm is exactly 2.
        assert_eq!(
            evaluate(0.0, 0.0, Complex::new(-2.0, 0.0)),
            EscapeResult::Escaped(1)
        );
    }

    #[test]
    fn custom_budget_is_honoured() {
        // z₀ = 1.5 with c = 0 escapes at iteration 1 (2.25 ≥ 2).
        let params = EscapeParams::default().with_iteration_budget(1);
        let j = Julia::new(Complex::ZERO, params);
        assert_eq!(j.evaluate(Complex::new(1.5, 0.0)), EscapeResult::Bounded);

        let j = Julia::new(Complex::ZERO, params.with_iteration_budget(2));
        assert_eq!(j.evaluate(Complex::new(1.5, 0.0)), EscapeResult::Escaped(1));
    }

    #[test]
    fn orbit_starts_at_seed() {
        let j = Julia::new(Complex::new(1.0, 0.0), EscapeParams::default());
        let orbit = j.orbit(Complex::ZERO, 4);
        assert_eq!(
            orbit,
            vec![
                Complex::new(0.0, 0.0),
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::new(5.0, 0.0),
            ]
        );
    }

    #[test]
    fn deterministic_results() {
        let j = Julia::default();
        let points = [
            Complex::new(0.0, 0.0),
            Complex::new(0.5, 0.5),
            Complex::new(-1.0, 0.3),
            Complex::new(0.0, 1.0),
        ];
        let run1: Vec<_> = points.iter().map(|&p| j.evaluate(p)).collect();
        let run2: Vec<_> = points.iter().rev().map(|&p| j.evaluate(p)).collect();
        let run2: Vec<_> = run2.into_iter().rev().collect();
        assert_eq!(run1, run2, "results must not depend on call order");
    }
}
