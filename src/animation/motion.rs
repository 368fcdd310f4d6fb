//! Entrance helpers: fade, slide-up and staggered list entrances.
//!
//! Every helper maps a (scene-local) frame through [`interpolate`] with the standard ease and
//! clamping on both sides, so values hold steady before the delay and after the entrance ends.

use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
    },
    foundation::core::{FrameIndex, Vec2},
    foundation::error::ReelResult,
};

pub const DEFAULT_ENTRANCE_FRAMES: u64 = 18;
pub const DEFAULT_SLIDE_DISTANCE: f64 = 16.0;
pub const DEFAULT_STAGGER_BASE_DELAY: u64 = 20;
pub const DEFAULT_STAGGER_FRAMES: u64 = 12;

/// Opacity and vertical offset of an element part-way through its entrance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entrance {
    /// In `[0, 1]`.
    pub opacity: f64,
    /// Downward offset in pixels, shrinking to 0 as the element settles.
    pub offset_y: f64,
}

impl Entrance {
    /// Fully settled: opaque with no offset.
    pub const SETTLED: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn translation(self) -> Vec2 {
        Vec2::new(0.0, self.offset_y)
    }
}

fn entrance_opts() -> InterpolateOpts {
    InterpolateOpts::clamped().with_ease(Ease::STANDARD)
}

fn window(delay: u64, duration: u64) -> [f64; 2] {
    [delay as f64, delay.saturating_add(duration) as f64]
}

/// 0 before `delay`, 1 at and after `delay + duration`, eased in between.
pub fn fade_in(frame: FrameIndex, delay: u64, duration: u64) -> ReelResult<f64> {
    interpolate(
        frame.as_f64(),
        &window(delay, duration),
        &[0.0, 1.0],
        &entrance_opts(),
    )
}

/// `distance` before `delay`, 0 at and after `delay + duration`, eased in between.
pub fn slide_up(frame: FrameIndex, delay: u64, duration: u64, distance: f64) -> ReelResult<f64> {
    interpolate(
        frame.as_f64(),
        &window(delay, duration),
        &[distance, 0.0],
        &entrance_opts(),
    )
}

pub fn fade_slide_in(
    frame: FrameIndex,
    delay: u64,
    duration: u64,
    distance: f64,
) -> ReelResult<Entrance> {
    Ok(Entrance {
        opacity: fade_in(frame, delay, duration)?,
        offset_y: slide_up(frame, delay, duration, distance)?,
    })
}

/// Frame at which item `index` of a staggered list begins its entrance.
pub fn stagger_delay(index: usize, base_delay: u64, stagger: u64) -> u64 {
    base_delay.saturating_add((index as u64).saturating_mul(stagger))
}

/// [`fade_slide_in`] for item `index` of a list, delayed by `index * stagger` after item 0.
pub fn staggered_fade_in(
    frame: FrameIndex,
    index: usize,
    base_delay: u64,
    stagger: u64,
    duration: u64,
) -> ReelResult<Entrance> {
    fade_slide_in(
        frame,
        stagger_delay(index, base_delay, stagger),
        duration,
        DEFAULT_SLIDE_DISTANCE,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
