//! Coordinate and geometry types shared by generators and consumers.
//!
//! Screen space:
//! - pixels, origin bottom-left, +X right, +Y up
//!
//! World space:
//! - scene units, consumed with the camera's view/projection
//!
//! Vectors come from `glam`; only the rectangle and viewport types live here.

mod rect;
mod viewport;

pub use glam::{Vec2, Vec3};
pub use rect::Rect;
pub use viewport::Viewport;
