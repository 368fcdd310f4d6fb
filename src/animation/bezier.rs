//! CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curves.
//!
//! The curve runs from `(0, 0)` to `(1, 1)` with two free control points. Sampling maps a
//! progress value `x` to the curve's `y` by first solving for the curve parameter whose
//! x-coordinate equals the input.

use crate::foundation::error::{ReelError, ReelResult};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Material "standard" curve, the house ease for every entrance and crossfade.
    pub const STANDARD: Self = Self {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// Build a curve. The x control points must lie in `[0, 1]` so the curve stays a function
    /// of time.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> ReelResult<Self> {
        let curve = Self { x1, y1, x2, y2 };
        curve.validate()?;
        Ok(curve)
    }

    pub fn validate(&self) -> ReelResult<()> {
        if ![self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ReelError::configuration(
                "cubic-bezier control points must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.x1) || !(0.0..=1.0).contains(&self.x2) {
            return Err(ReelError::configuration(
                "cubic-bezier x control points must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Sample the curve at progress `x` (clamped to `[0, 1]`).
    pub fn sample(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return x;
        }
        let t = self.solve_t(x);
        eval_cubic(0.0, self.y1, self.y2, 1.0, t)
    }

    fn solve_t(&self, target_x: f64) -> f64 {
        let mut t = target_x;
        for _ in 0..NEWTON_ITERATIONS {
            let x = eval_cubic(0.0, self.x1, self.x2, 1.0, t) - target_x;
            if x.abs() < EPSILON {
                return t;
            }
            let dx = eval_cubic_derivative(0.0, self.x1, self.x2, 1.0, t);
            if dx.abs() < 1e-9 {
                break;
            }
            t = (t - x / dx).clamp(0.0, 1.0);
        }

        // Newton stalled on a flat spot; x(t) is monotonic for valid curves so bisection converges.
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        t = target_x;
        for _ in 0..BISECTION_ITERATIONS {
            let x = eval_cubic(0.0, self.x1, self.x2, 1.0, t);
            if (x - target_x).abs() < EPSILON {
                return t;
            }
            if x < target_x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) * 0.5;
        }
        t
    }
}

fn eval_cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

fn eval_cubic_derivative(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bezier.rs"]
mod tests;
