//! Immediate-mode debug drawing.
//!
//! Callers describe lines and simple shapes anywhere in a frame; the crate turns
//! them into three flat, color-run-annotated vertex buffers that a renderer
//! drains once per frame:
//! - world-space lines, drawn with the scene camera
//! - screen-space filled triangles, in pixels
//! - screen-space lines, in pixels
//!
//! ```ignore
//! let mut session = FrameSession::new();
//! session.set_active(true);
//!
//! let mut world = session.world();
//! world.set_color(Color::RED);
//! world.sphere(Vec3::ZERO, 1.0);
//!
//! session.screen().fill_rect(Rect::new(10.0, 10.0, 40.0, 20.0));
//!
//! let mut batch = FrameBatch::new();
//! session.present(&mut batch);
//! ```

pub mod buffer;
pub mod config;
pub mod coords;
pub mod draw;
pub mod logging;
pub mod paint;
pub mod render;
pub mod session;

pub use config::DrawSettings;
pub use coords::{Rect, Vec2, Vec3, Viewport};
pub use draw::{Screen, World};
pub use paint::Color;
pub use render::{FrameBatch, Layer};
pub use session::{FrameConsumer, FrameSession, FrameStats, FrameView};
