//! Easing curves, the interpolation primitive and entrance helpers built on top of it.

pub(crate) mod bezier;
pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod motion;
