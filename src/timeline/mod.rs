//! Segments, the frame-driven compositor, timeline construction and global overlays.

pub(crate) mod builder;
pub(crate) mod compositor;
pub(crate) mod overlay;
pub(crate) mod segment;
