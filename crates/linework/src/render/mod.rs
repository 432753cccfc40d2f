//! Renderer-facing side of a frame.
//!
//! The crate does not issue draw calls. This module packs a frame into GPU-ready
//! vertex arrays and describes how a wgpu renderer should draw them:
//! - `WorldLines` with the camera view/projection
//! - `ScreenTriangles`, then `ScreenLines`, with [`pixel_projection`]
//! - blending per [`blend_state`], no depth test or writes, culling off

mod batch;
mod pipeline;
mod vertex;

pub use batch::{FrameBatch, Layer};
pub use pipeline::{blend_state, pixel_projection};
pub use vertex::{ScreenVertex, WorldVertex};
