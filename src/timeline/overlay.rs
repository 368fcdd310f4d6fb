use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, Interpolator},
    },
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    timeline::compositor::Timeline,
};

/// A timeline-wide element (e.g. a corner watermark) that fades in at `range.start`, holds
/// at `peak` and fades out by `range.end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    range: FrameRange,
    fade: u64,
    peak: f64,
    curve: Interpolator,
}

impl Overlay {
    pub fn new(range: FrameRange, fade: u64, peak: f64, ease: Ease) -> ReelResult<Self> {
        if fade == 0 {
            return Err(ReelError::configuration("overlay fade must be > 0"));
        }
        if !(0.0..=1.0).contains(&peak) {
            return Err(ReelError::configuration(format!(
                "overlay peak opacity must be in [0, 1], got {peak}"
            )));
        }
        let start = range.start.as_f64();
        let end = range.end.as_f64();
        let f = fade as f64;
        let curve = Interpolator::new(
            vec![start, start + f, end - f, end],
            vec![0.0, peak, peak, 0.0],
            InterpolateOpts::clamped().with_ease(ease),
        )
        .map_err(|e| {
            ReelError::configuration(format!(
                "overlay range {}..{} is too short for a {fade}-frame fade: {e}",
                range.start.0, range.end.0
            ))
        })?;
        Ok(Self {
            range,
            fade,
            peak,
            curve,
        })
    }

    /// Overlay running from the start of segment `from` to the end of segment `to`, using the
    /// timeline's ease.
    pub fn spanning<S>(
        timeline: &Timeline<S>,
        from: &str,
        to: &str,
        fade: u64,
        peak: f64,
    ) -> ReelResult<Self> {
        let lookup = |id: &str| {
            timeline.segment(id).ok_or_else(|| {
                ReelError::configuration(format!("overlay references unknown segment '{id}'"))
            })
        };
        let start = lookup(from)?.start;
        let end = lookup(to)?.end();
        let range = FrameRange::new(start, end).map_err(|_| {
            ReelError::configuration(format!(
                "overlay segment '{to}' ends before segment '{from}' starts"
            ))
        })?;
        Self::new(range, fade, peak, timeline.ease())
    }

    pub fn range(&self) -> FrameRange {
        self.range
    }

    pub fn fade(&self) -> u64 {
        self.fade
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn opacity_at(&self, frame: FrameIndex) -> f64 {
        self.curve.sample(frame.as_f64())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/overlay.rs"]
mod tests;
