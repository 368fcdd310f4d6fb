//! Static, JSON-backed configuration.

pub(crate) mod presentation;
