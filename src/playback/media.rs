//! Capability interfaces the playback driver talks to: the media element, the timer host and
//! the navigator that performs an auto-advance.

use std::time::Duration;

/// How much of the media resource is available, mirroring HTML media `readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum ReadyState {
    HaveNothing,
    HaveMetadata,
    HaveCurrentData,
    HaveFutureData,
    HaveEnoughData,
}

/// Preload hint for media that is not on screen yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preload {
    None,
    Metadata,
    Auto,
}

/// The host refused to start playback, typically because of an autoplay policy.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("playback refused: {reason}")]
pub struct PlaybackRefused {
    pub reason: String,
}

impl PlaybackRefused {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// One media clip attached to a slide.
pub trait Media {
    /// Begin (re)loading the resource.
    fn load(&mut self);
    fn play(&mut self) -> Result<(), PlaybackRefused>;
    fn pause(&mut self);
    fn seek_to_start(&mut self);
    fn ready_state(&self) -> ReadyState;
    fn is_paused(&self) -> bool;
    fn is_ended(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn preload(&self) -> Preload;
    fn set_preload(&mut self, preload: Preload);
}

/// Identifies one scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// One-shot timers owned by the host event loop. The host reports expiry back to the driver.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Receives the auto-advance request once a pending timer fires.
pub trait Navigator {
    fn advance(&mut self);
}

impl<F: FnMut()> Navigator for F {
    fn advance(&mut self) {
        self()
    }
}
