use crate::{
    animation::ease::Ease,
    foundation::core::{Fps, FrameIndex},
    foundation::error::{ReelError, ReelResult},
    timeline::{compositor::Timeline, segment::Segment},
};

/// Lays scenes end to end, each starting `transition` frames before the previous one ends.
///
/// ```
/// use slidereel::{Fps, FrameIndex, ReelResult, TimelineBuilder};
///
/// let blank = |_: FrameIndex| -> ReelResult<()> { Ok(()) };
/// let timeline = TimelineBuilder::new(Fps::new(30, 1)?, 12)
///     .scene("intro", 156, blank)
///     .scene("logo", 150, blank)
///     .scene("slide-1", 300, blank)
///     .build()?;
///
/// assert_eq!(timeline.segments()[1].start, FrameIndex(144));
/// assert_eq!(timeline.segments()[2].start, FrameIndex(282));
/// assert_eq!(timeline.total_frames()?, FrameIndex(582));
/// # Ok::<(), slidereel::ReelError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TimelineBuilder<S> {
    fps: Fps,
    transition: u64,
    ease: Ease,
    scenes: Vec<(String, u64, S)>,
}

impl<S> TimelineBuilder<S> {
    pub fn new(fps: Fps, transition: u64) -> Self {
        Self {
            fps,
            transition,
            ease: Ease::STANDARD,
            scenes: Vec::new(),
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Append a scene lasting `duration` frames.
    pub fn scene(mut self, id: impl Into<String>, duration: u64, scene: S) -> Self {
        self.scenes.push((id.into(), duration, scene));
        self
    }

    pub fn build(self) -> ReelResult<Timeline<S>> {
        if self.scenes.is_empty() {
            return Err(ReelError::configuration("timeline needs at least one scene"));
        }

        let mut segments = Vec::with_capacity(self.scenes.len());
        let mut next_start = 0u64;
        for (id, duration, scene) in self.scenes {
            if duration < self.transition {
                return Err(ReelError::configuration(format!(
                    "scene '{id}' lasts {duration} frames, less than the {} frame transition",
                    self.transition
                )));
            }
            let start = next_start;
            next_start = start
                .checked_add(duration - self.transition)
                .ok_or_else(|| ReelError::configuration("timeline length overflows u64"))?;
            segments.push(Segment::new(id, FrameIndex(start), duration, scene));
        }

        let timeline = Timeline::new(segments, self.transition, self.fps)?.with_ease(self.ease)?;
        tracing::debug!(
            segments = timeline.segments().len(),
            total_frames = timeline.total_frames()?.0,
            transition = self.transition,
            "built timeline"
        );
        Ok(timeline)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
