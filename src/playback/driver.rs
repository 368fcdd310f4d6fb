//! Event-driven media playback for a slide deck.
//!
//! The host feeds slide-change, media and timer events in one at a time; the driver keeps one
//! media clip per slide in step with navigation. Entering a slide rewinds and plays its clip
//! (retrying once muted if autoplay is refused); leaving pauses and rewinds it.
//!
//! The driver owns at most one pending auto-advance timer. Every transition cancels it, and
//! scheduling a new one always replaces the old one, so a slide visit produces at most one
//! advance.

use crate::{
    foundation::error::{ReelError, ReelResult},
    playback::{
        deck::{AutoAdvance, DeckConfig, NavCommand},
        media::{Media, Navigator, Preload, ReadyState, Scheduler, TimerHandle},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideState {
    Idle,
    Playing,
}

/// What the driver knows about a slide's media resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaStatus {
    Pending,
    Loaded,
    /// Load failed; the slide shows a placeholder instead.
    Missing,
}

/// Result of trying to start a clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    /// Refused once, then played muted.
    PlayedMuted,
    /// Refused twice. The clip stays stalled until a user interaction unlocks it.
    Blocked,
    NoMedia,
}

#[derive(Debug)]
pub struct DeckSlide<M> {
    media: Option<M>,
    hold: bool,
    state: SlideState,
    status: MediaStatus,
}

impl<M> DeckSlide<M> {
    pub fn new(media: Option<M>, hold: bool) -> Self {
        Self {
            media,
            hold,
            state: SlideState::Idle,
            status: MediaStatus::Pending,
        }
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    pub fn is_hold(&self) -> bool {
        self.hold
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }

    pub fn shows_placeholder(&self) -> bool {
        self.status == MediaStatus::Missing
    }

    /// One slide per config entry, opening each media source with `open`.
    pub fn from_config(config: &DeckConfig, mut open: impl FnMut(&str) -> M) -> Vec<Self> {
        config
            .slides
            .iter()
            .map(|s| Self::new(s.media.as_deref().map(&mut open), s.hold))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingAdvance {
    handle: TimerHandle,
    slide: usize,
}

#[derive(Debug)]
pub struct PlaybackDriver<M, T> {
    slides: Vec<DeckSlide<M>>,
    scheduler: T,
    auto_advance: AutoAdvance,
    current: Option<usize>,
    pending: Option<PendingAdvance>,
    // One ended-notification may arm the timer per visit.
    advance_armed: bool,
    autoplay_unlocked: bool,
}

impl<M: Media, T: Scheduler> PlaybackDriver<M, T> {
    /// The first slide's media preloads eagerly; the rest wait until they are next in line.
    pub fn new(
        mut slides: Vec<DeckSlide<M>>,
        scheduler: T,
        auto_advance: AutoAdvance,
    ) -> ReelResult<Self> {
        if slides.is_empty() {
            return Err(ReelError::configuration("deck needs at least one slide"));
        }
        for (i, slide) in slides.iter_mut().enumerate() {
            if let Some(media) = slide.media.as_mut() {
                media.set_preload(if i == 0 { Preload::Auto } else { Preload::None });
            }
        }
        Ok(Self {
            slides,
            scheduler,
            auto_advance,
            current: None,
            pending: None,
            advance_armed: false,
            autoplay_unlocked: false,
        })
    }

    pub fn slides(&self) -> &[DeckSlide<M>] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&DeckSlide<M>> {
        self.slides.get(index)
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending.map(|p| p.handle)
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    /// `"3 / 8"` style position label.
    pub fn counter_label(&self) -> String {
        let index = self.current.map_or(0, |c| c + 1);
        format!("{index} / {}", self.slides.len())
    }

    /// Deck is ready with `index` on screen.
    pub fn ready(&mut self, index: usize) -> ReelResult<PlayOutcome> {
        let outcome = self.enter(index)?;
        self.preload_after(index);
        Ok(outcome)
    }

    /// The host moved from `previous` to `current`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn slide_changed(
        &mut self,
        previous: Option<usize>,
        current: usize,
    ) -> ReelResult<PlayOutcome> {
        self.check_index(current)?;
        if let Some(prev) = previous {
            self.leave(prev)?;
        }
        let outcome = self.enter(current)?;
        self.preload_after(current);
        Ok(outcome)
    }

    /// Apply a navigation request immediately, whatever the media is doing. Returns the new
    /// slide index, or `None` at either end of the deck.
    pub fn navigate(&mut self, cmd: NavCommand) -> ReelResult<Option<usize>> {
        let Some(current) = self.current else {
            return Ok(None);
        };
        let Some(target) = cmd.target(current, self.slides.len()) else {
            return Ok(None);
        };
        self.slide_changed(Some(current), target)?;
        Ok(Some(target))
    }

    /// The media on `index` finished playing.
    pub fn media_ended(&mut self, index: usize) {
        if self.current != Some(index) || !self.advance_armed {
            return;
        }
        self.advance_armed = false;

        self.cancel_pending();
        let handle = self.scheduler.schedule(self.auto_advance.delay);
        tracing::debug!(slide = index, ?handle, "auto-advance scheduled");
        self.pending = Some(PendingAdvance {
            handle,
            slide: index,
        });
    }

    /// A timer reported by the host expired. Advances only if `handle` is the pending one.
    pub fn timer_fired(&mut self, handle: TimerHandle, navigator: &mut impl Navigator) -> bool {
        match self.pending {
            Some(p) if p.handle == handle && self.current == Some(p.slide) => {
                self.pending = None;
                tracing::debug!(slide = p.slide, "auto-advancing");
                navigator.advance();
                true
            }
            _ => {
                tracing::trace!(?handle, "ignoring stale timer");
                false
            }
        }
    }

    pub fn media_loaded(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.status = MediaStatus::Loaded;
        }
    }

    pub fn media_error(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            tracing::warn!(slide = index, "media failed to load; showing placeholder");
            slide.status = MediaStatus::Missing;
        }
    }

    /// First key press or click: resume a clip that autoplay policy left stalled, with sound.
    /// Later interactions do nothing.
    pub fn user_interaction(&mut self) {
        if self.autoplay_unlocked {
            return;
        }
        self.autoplay_unlocked = true;

        let Some(media) = self
            .current
            .and_then(|i| self.slides.get_mut(i))
            .and_then(|s| s.media.as_mut())
        else {
            return;
        };
        if media.is_paused() && !media.is_ended() {
            media.set_muted(false);
            if let Err(refused) = media.play() {
                tracing::debug!(%refused, "unlock playback refused");
            }
        }
    }

    /// Make `index` the current slide and start its clip from the beginning.
    pub fn enter(&mut self, index: usize) -> ReelResult<PlayOutcome> {
        self.check_index(index)?;
        self.cancel_pending();
        self.advance_armed = false;
        self.current = Some(index);

        let auto_advance = self.auto_advance.enabled;
        let slide = &mut self.slides[index];
        let Some(media) = slide.media.as_mut() else {
            slide.state = SlideState::Playing;
            return Ok(PlayOutcome::NoMedia);
        };

        media.seek_to_start();
        if media.ready_state() == ReadyState::HaveNothing {
            media.load();
        }
        let outcome = start_playback(media, index);
        slide.state = SlideState::Playing;
        self.advance_armed = auto_advance && !slide.hold;
        Ok(outcome)
    }

    /// Stop the clip on `index` and rewind it.
    pub fn leave(&mut self, index: usize) -> ReelResult<()> {
        self.check_index(index)?;
        self.cancel_pending();
        let slide = &mut self.slides[index];
        slide.state = SlideState::Idle;
        if let Some(media) = slide.media.as_mut() {
            media.pause();
            media.seek_to_start();
        }
        Ok(())
    }

    fn preload_after(&mut self, index: usize) {
        let Some(media) = self
            .slides
            .get_mut(index + 1)
            .and_then(|s| s.media.as_mut())
        else {
            return;
        };
        if media.preload() == Preload::None {
            media.set_preload(Preload::Metadata);
            media.load();
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(p) = self.pending.take() {
            tracing::debug!(handle = ?p.handle, "auto-advance cancelled");
            self.scheduler.cancel(p.handle);
        }
    }

    fn check_index(&self, index: usize) -> ReelResult<()> {
        if index >= self.slides.len() {
            return Err(ReelError::evaluation(format!(
                "slide index {index} out of range for a {}-slide deck",
                self.slides.len()
            )));
        }
        Ok(())
    }
}

fn start_playback<M: Media>(media: &mut M, index: usize) -> PlayOutcome {
    let Err(refused) = media.play() else {
        return PlayOutcome::Played;
    };
    tracing::debug!(slide = index, %refused, "playback refused; retrying muted");
    media.set_muted(true);
    match media.play() {
        Ok(()) => PlayOutcome::PlayedMuted,
        Err(refused) => {
            tracing::debug!(slide = index, %refused, "muted playback refused; clip stalled");
            PlayOutcome::Blocked
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
