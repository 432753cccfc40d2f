//! Primitive generators.
//!
//! Responsibilities:
//! - turn shape descriptions into flat vertex streams
//! - append them to the matching frame buffer through a borrowed handle
//! - keep shape-specific math isolated per shape file under `world::*` / `screen::*`
//!
//! Extending:
//! - add a shape file under `world` or `screen`
//! - implement it as a method on the handle, checking the active gate first
//! - emit pairs for line buffers, triples for the triangle buffer

mod math;
mod screen;
mod world;

pub use screen::Screen;
pub use world::World;
