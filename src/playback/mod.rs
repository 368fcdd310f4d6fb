//! Event-driven media playback for the browser-style deck.

pub(crate) mod deck;
pub(crate) mod driver;
pub(crate) mod media;
