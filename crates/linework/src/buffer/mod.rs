//! Per-frame vertex storage.
//!
//! Responsibilities:
//! - accumulate vertices in call order
//! - track sparse color runs keyed by vertex index
//! - resolve one color per vertex for consumers

mod color_runs;
mod vertex_buffer;

pub use color_runs::{ColorRun, ColorRunTrack, ResolvedColors};
pub use vertex_buffer::VertexBuffer;

use glam::{Vec2, Vec3};

/// World-space line list.
pub type WorldLines = VertexBuffer<Vec3>;

/// Screen-space line list.
pub type ScreenLines = VertexBuffer<Vec2>;

/// Screen-space triangle list.
pub type ScreenTriangles = VertexBuffer<Vec2>;
