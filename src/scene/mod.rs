//! Config-driven scene renderers.

pub(crate) mod scripted;
