//! Frame-driven timeline compositor.
//!
//! A [`Timeline`] is an ordered list of [`Segment`]s sharing one crossfade width. For any
//! global frame the compositor reports which segments are active, each one's local frame and
//! its crossfade opacity. Adjacent segments overlap by `transition` frames, so a boundary is
//! a crossfade rather than a hard cut.
//!
//! Declaration order is paint order: in an overlap window the later segment is drawn on top.
//!
//! Membership is checked independently for every segment, so unsorted segment lists work.
//! Overlaps between non-adjacent segments are not detected or rejected; keeping overlaps
//! adjacent is the caller's job ([`crate::TimelineBuilder`] only produces adjacent ones).
//! [`Timeline::overlap_windows`] lists every overlapping pair for diagnostics.

use std::collections::BTreeSet;

use crate::{
    animation::ease::Ease,
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    timeline::{
        overlay::Overlay,
        segment::{Scene, Segment},
    },
};

/// Immutable, validated sequence of segments.
#[derive(Clone, Debug)]
pub struct Timeline<S> {
    segments: Vec<Segment<S>>,
    transition: u64,
    fps: Fps,
    ease: Ease,
    overlay: Option<Overlay>,
}

/// A segment active at the queried frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ActiveSegment {
    /// Position in declaration order (paint order).
    pub index: usize,
    pub id: String,
    /// Always in `[0, duration)`.
    pub local_frame: FrameIndex,
    /// Crossfade opacity in `[0, 1]`.
    pub opacity: f64,
}

/// One rendered layer of a composed frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ComposedLayer<V> {
    #[serde(flatten)]
    pub segment: ActiveSegment,
    pub visual: V,
}

/// Everything a render collaborator needs to paint one global frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ComposedFrame<V> {
    pub frame: FrameIndex,
    /// Bottom to top.
    pub layers: Vec<ComposedLayer<V>>,
    /// Opacity of the timeline-wide overlay, when one is configured.
    pub overlay_opacity: Option<f64>,
}

/// Two segments that share at least one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OverlapWindow {
    pub first: usize,
    pub second: usize,
    pub range: FrameRange,
}

impl OverlapWindow {
    /// True when the two segments are neighbours in declaration order.
    pub fn is_adjacent(&self) -> bool {
        self.second == self.first + 1
    }
}

impl<S> Timeline<S> {
    /// Validate and wrap `segments`.
    ///
    /// Every segment needs `duration > 0` and `duration >= transition`, and ids must be
    /// unique. An empty list is accepted here; [`Timeline::total_frames`] rejects it.
    pub fn new(segments: Vec<Segment<S>>, transition: u64, fps: Fps) -> ReelResult<Self> {
        validate_segments(&segments, transition)?;
        Ok(Self {
            segments,
            transition,
            fps,
            ease: Ease::STANDARD,
            overlay: None,
        })
    }

    /// Replace the crossfade ease (defaults to [`Ease::STANDARD`]).
    pub fn with_ease(mut self, ease: Ease) -> ReelResult<Self> {
        if let Ease::CubicBezier(curve) = ease {
            curve.validate()?;
        }
        self.ease = ease;
        Ok(self)
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn segments(&self) -> &[Segment<S>] {
        &self.segments
    }

    pub fn segment(&self, id: &str) -> Option<&Segment<S>> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn transition(&self) -> u64 {
        self.transition
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Last declared segment's `start + duration`.
    pub fn total_frames(&self) -> ReelResult<FrameIndex> {
        let last = self
            .segments
            .last()
            .ok_or_else(|| ReelError::configuration("timeline has no segments"))?;
        Ok(last.end())
    }

    pub fn duration_secs(&self) -> ReelResult<f64> {
        Ok(self.fps.frames_to_secs(self.total_frames()?.0))
    }

    /// Segments active at `frame`, in declaration order.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn active_segments_at(&self, frame: FrameIndex) -> ReelResult<Vec<ActiveSegment>> {
        let mut out = Vec::with_capacity(2);
        for (index, seg) in self.segments.iter().enumerate() {
            let Some(local_frame) = seg.local_frame(frame) else {
                continue;
            };
            out.push(ActiveSegment {
                index,
                id: seg.id.clone(),
                local_frame,
                opacity: seg.opacity_at(frame, self.transition, self.ease)?,
            });
        }
        Ok(out)
    }

    pub fn overlay_opacity_at(&self, frame: FrameIndex) -> Option<f64> {
        self.overlay.as_ref().map(|o| o.opacity_at(frame))
    }

    /// Every pair of segments sharing frames, ordered by declaration index.
    pub fn overlap_windows(&self) -> Vec<OverlapWindow> {
        let mut out = Vec::new();
        for (i, a) in self.segments.iter().enumerate() {
            for (j, b) in self.segments.iter().enumerate().skip(i + 1) {
                let shared = a.range().overlap_len(b.range());
                if shared == 0 {
                    continue;
                }
                let start = a.start.max(b.start);
                out.push(OverlapWindow {
                    first: i,
                    second: j,
                    range: FrameRange::from_start_len(start, shared),
                });
            }
        }
        out
    }
}

impl<S: Scene> Timeline<S> {
    /// Render every active segment at `frame` and attach the overlay value.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn compose(&self, frame: FrameIndex) -> ReelResult<ComposedFrame<S::Visual>> {
        let active = self.active_segments_at(frame)?;
        let mut layers = Vec::with_capacity(active.len());
        for segment in active {
            let visual = self.segments[segment.index]
                .scene
                .render(segment.local_frame)
                .map_err(|e| {
                    ReelError::evaluation(format!(
                        "scene '{}' failed at local frame {}: {e}",
                        segment.id, segment.local_frame.0
                    ))
                })?;
            layers.push(ComposedLayer { segment, visual });
        }
        tracing::trace!(layers = layers.len(), "composed frame");
        Ok(ComposedFrame {
            frame,
            layers,
            overlay_opacity: self.overlay_opacity_at(frame),
        })
    }
}

fn validate_segments<S>(segments: &[Segment<S>], transition: u64) -> ReelResult<()> {
    let mut seen = BTreeSet::new();
    for seg in segments {
        if seg.duration == 0 {
            return Err(ReelError::configuration(format!(
                "segment '{}' must have duration > 0",
                seg.id
            )));
        }
        if seg.duration < transition {
            return Err(ReelError::configuration(format!(
                "segment '{}' duration {} is shorter than the {transition}-frame transition",
                seg.id, seg.duration
            )));
        }
        if !seen.insert(seg.id.as_str()) {
            return Err(ReelError::configuration(format!(
                "duplicate segment id '{}'",
                seg.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compositor.rs"]
mod tests;
