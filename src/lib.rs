//! Slidereel is a frame-driven timeline compositor for slide presentations.
//!
//! A presentation is an ordered list of scene segments on one global frame axis. Neighbouring
//! segments overlap by a fixed transition width and crossfade through it. For any global frame
//! the compositor reports which segments are active, the local frame each one should render
//! and the opacity it is painted with.
//!
//! # Pipeline overview
//!
//! 1. **Build**: scenes + durations -> `Timeline` (`TimelineBuilder` or `PresentationConfig`)
//! 2. **Resolve**: `Timeline + FrameIndex -> Vec<ActiveSegment>` (who is visible, in paint order)
//! 3. **Compose**: each active `Scene` renders its local frame -> `ComposedFrame`
//!
//! Scene internals animate with [`interpolate`] and the entrance helpers ([`fade_in`],
//! [`staggered_fade_in`], ...), all easing through the standard `cubic-bezier(0.4, 0, 0.2, 1)`.
//!
//! Separately, [`PlaybackDriver`] is an event-driven state machine for the browser-style deck:
//! it plays and pauses one media clip per slide as the viewer navigates.
//!
//! The crate is pure and single-threaded: no IO outside config loading, no clocks, no globals.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod playback;
mod scene;
mod timeline;

pub use animation::bezier::CubicBezier;
pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOpts, Interpolator, interpolate};
pub use animation::motion::{
    DEFAULT_ENTRANCE_FRAMES, DEFAULT_SLIDE_DISTANCE, DEFAULT_STAGGER_BASE_DELAY,
    DEFAULT_STAGGER_FRAMES, Entrance, fade_in, fade_slide_in, slide_up, stagger_delay,
    staggered_fade_in,
};
pub use config::presentation::{
    OverlayConfig, PresentationConfig, SLIDE_FRAMES, SceneConfig, TRANSITION_FRAMES,
};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use playback::deck::{
    AutoAdvance, DEFAULT_AUTO_ADVANCE_DELAY_MS, DeckConfig, NavCommand, SlideConfig,
};
pub use playback::driver::{DeckSlide, MediaStatus, PlayOutcome, PlaybackDriver, SlideState};
pub use playback::media::{
    Media, Navigator, PlaybackRefused, Preload, ReadyState, Scheduler, TimerHandle,
};
pub use scene::scripted::{ElementCue, ElementVisual, EntranceCue, SceneVisual, ScriptedScene};
pub use timeline::builder::TimelineBuilder;
pub use timeline::compositor::{
    ActiveSegment, ComposedFrame, ComposedLayer, OverlapWindow, Timeline,
};
pub use timeline::overlay::Overlay;
pub use timeline::segment::{Scene, Segment};
