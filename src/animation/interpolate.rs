//! Piecewise-linear interpolation with per-side extrapolation and optional easing.
//!
//! This is the primitive every other animation value in the crate is built on: fades, slide
//! offsets, crossfade opacity and overlay opacity all map a frame number through a small set
//! of breakpoints.
//!
//! Easing only shapes the interior spans. Inputs outside the breakpoint range either hold
//! the boundary output ([`Extrapolate::Clamp`]) or continue the outermost span's linear slope
//! ([`Extrapolate::Extend`]); neither is eased.

use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Policy for inputs outside the breakpoint range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary output value.
    #[default]
    Clamp,
    /// Continue the boundary span's linear slope.
    Extend,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    #[serde(default)]
    pub left: Extrapolate,
    #[serde(default)]
    pub right: Extrapolate,
    #[serde(default)]
    pub ease: Option<Ease>,
}

impl InterpolateOpts {
    /// Clamp on both sides, no easing.
    pub fn clamped() -> Self {
        Self::default()
    }

    /// Extend on both sides, no easing.
    pub fn extended() -> Self {
        Self {
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
            ease: None,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
}

/// Interpolate `input` over `breakpoints -> outputs`.
///
/// Fails with a configuration error when fewer than two breakpoints are given, the lengths
/// differ, the breakpoints are not strictly ascending, or any value is non-finite.
pub fn interpolate(
    input: f64,
    breakpoints: &[f64],
    outputs: &[f64],
    opts: &InterpolateOpts,
) -> ReelResult<f64> {
    validate(breakpoints, outputs, opts)?;
    Ok(sample_validated(input, breakpoints, outputs, opts))
}

/// Pre-validated interpolation curve. Sampling cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolator {
    breakpoints: Vec<f64>,
    outputs: Vec<f64>,
    opts: InterpolateOpts,
}

impl Interpolator {
    pub fn new(
        breakpoints: impl Into<Vec<f64>>,
        outputs: impl Into<Vec<f64>>,
        opts: InterpolateOpts,
    ) -> ReelResult<Self> {
        let breakpoints = breakpoints.into();
        let outputs = outputs.into();
        validate(&breakpoints, &outputs, &opts)?;
        Ok(Self {
            breakpoints,
            outputs,
            opts,
        })
    }

    pub fn sample(&self, input: f64) -> f64 {
        sample_validated(input, &self.breakpoints, &self.outputs, &self.opts)
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }
}

fn validate(breakpoints: &[f64], outputs: &[f64], opts: &InterpolateOpts) -> ReelResult<()> {
    if breakpoints.len() < 2 {
        return Err(ReelError::configuration(format!(
            "interpolation needs at least 2 breakpoints, got {}",
            breakpoints.len()
        )));
    }
    if breakpoints.len() != outputs.len() {
        return Err(ReelError::configuration(format!(
            "interpolation breakpoints ({}) and outputs ({}) must have the same length",
            breakpoints.len(),
            outputs.len()
        )));
    }
    if !breakpoints.iter().chain(outputs).all(|v| v.is_finite()) {
        return Err(ReelError::configuration(
            "interpolation breakpoints and outputs must be finite",
        ));
    }
    if let Some(w) = breakpoints.windows(2).find(|w| w[0] >= w[1]) {
        return Err(ReelError::configuration(format!(
            "interpolation breakpoints must be strictly ascending ({} then {})",
            w[0], w[1]
        )));
    }
    if let Some(Ease::CubicBezier(curve)) = opts.ease {
        curve.validate()?;
    }
    Ok(())
}

fn sample_validated(
    input: f64,
    breakpoints: &[f64],
    outputs: &[f64],
    opts: &InterpolateOpts,
) -> f64 {
    let n = breakpoints.len();
    let first = breakpoints[0];
    let last = breakpoints[n - 1];

    if input < first {
        return match opts.left {
            Extrapolate::Clamp => outputs[0],
            Extrapolate::Extend => linear(
                input,
                breakpoints[0],
                breakpoints[1],
                outputs[0],
                outputs[1],
            ),
        };
    }
    if input > last {
        return match opts.right {
            Extrapolate::Clamp => outputs[n - 1],
            Extrapolate::Extend => linear(
                input,
                breakpoints[n - 2],
                breakpoints[n - 1],
                outputs[n - 2],
                outputs[n - 1],
            ),
        };
    }

    let idx = breakpoints.partition_point(|b| *b <= input);
    let i = idx.saturating_sub(1).min(n - 2);
    let (x0, x1) = (breakpoints[i], breakpoints[i + 1]);
    let (y0, y1) = (outputs[i], outputs[i + 1]);
    let t = (input - x0) / (x1 - x0);
    let te = opts.ease.map_or(t, |ease| ease.apply(t));
    y0 + (y1 - y0) * te
}

fn linear(input: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    y0 + (input - x0) * (y1 - y0) / (x1 - x0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
