use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
    },
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::ReelResult,
};

/// A scene renderer: a pure function from a segment-local frame to a visual description.
///
/// The concrete `Visual` type belongs to the rendering collaborator. Closures of the form
/// `Fn(FrameIndex) -> ReelResult<V>` are scenes.
pub trait Scene {
    type Visual;

    fn render(&self, local_frame: FrameIndex) -> ReelResult<Self::Visual>;
}

impl<F, V> Scene for F
where
    F: Fn(FrameIndex) -> ReelResult<V>,
{
    type Visual = V;

    fn render(&self, local_frame: FrameIndex) -> ReelResult<V> {
        self(local_frame)
    }
}

/// One scene's time window `[start, start + duration)` on the global timeline.
#[derive(Clone, Debug)]
pub struct Segment<S> {
    pub id: String,
    pub start: FrameIndex,
    pub duration: u64,
    pub scene: S,
}

impl<S> Segment<S> {
    pub fn new(id: impl Into<String>, start: FrameIndex, duration: u64, scene: S) -> Self {
        Self {
            id: id.into(),
            start,
            duration,
            scene,
        }
    }

    /// Exclusive end frame.
    pub fn end(&self) -> FrameIndex {
        FrameIndex(self.start.0.saturating_add(self.duration))
    }

    pub fn range(&self) -> FrameRange {
        FrameRange::from_start_len(self.start, self.duration)
    }

    pub fn is_active(&self, frame: FrameIndex) -> bool {
        self.range().contains(frame)
    }

    /// `frame - start` while active, `None` otherwise.
    pub fn local_frame(&self, frame: FrameIndex) -> Option<FrameIndex> {
        self.is_active(frame).then(|| FrameIndex(frame.0 - self.start.0))
    }

    /// Crossfade opacity at `frame`.
    ///
    /// Ramps 0 -> 1 over `[start, start + transition]`, holds at 1, then ramps 1 -> 0 over
    /// `[end - transition, end]`. When the two ramps overlap the lower of the two wins, so
    /// each side stays monotonic. A zero `transition` is a hard cut: 1 inside the segment,
    /// 0 outside.
    ///
    /// Ramps are sampled in segment-local frames, so precision does not depend on how far
    /// along the global timeline the segment starts.
    pub fn opacity_at(&self, frame: FrameIndex, transition: u64, ease: Ease) -> ReelResult<f64> {
        let Some(local) = self.local_frame(frame) else {
            return Ok(0.0);
        };
        if transition == 0 {
            return Ok(1.0);
        }

        let opts = InterpolateOpts::clamped().with_ease(ease);
        let f = local.as_f64();
        let d = self.duration as f64;
        let t = transition as f64;

        let ramp_in = interpolate(f, &[0.0, t], &[0.0, 1.0], &opts)?;
        let ramp_out = interpolate(f, &[d - t, d], &[1.0, 0.0], &opts)?;
        Ok(ramp_in.min(ramp_out).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segment.rs"]
mod tests;
