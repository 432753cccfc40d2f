//! Color model for vertex runs.
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
