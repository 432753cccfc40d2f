//! World-space line generators.
//!
//! Every shape is appended to the world line list as consecutive point pairs.
//! Shape-specific code lives in one file per shape family.

mod capsule;
mod circle;
mod conic;
mod cone;
mod cube;
mod helix;
mod sphere;

use glam::Vec3;

use crate::buffer::WorldLines;
use crate::config::DrawSettings;
use crate::paint::Color;

/// Drawing handle for the world-space line buffer.
///
/// Obtained from [`FrameSession::world`](crate::FrameSession::world). When the
/// session is inactive every call returns before touching the buffer.
pub struct World<'a> {
    lines: &'a mut WorldLines,
    settings: &'a DrawSettings,
    active: bool,
}

impl<'a> World<'a> {
    /// Wraps a standalone buffer. The handle is always active.
    #[inline]
    pub fn new(lines: &'a mut WorldLines, settings: &'a DrawSettings) -> Self {
        Self { lines, settings, active: true }
    }

    #[inline]
    pub(crate) fn gated(lines: &'a mut WorldLines, settings: &'a DrawSettings, active: bool) -> Self {
        Self { lines, settings, active }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Colors every world vertex appended after this call.
    pub fn set_color(&mut self, color: Color) {
        if !self.active {
            return;
        }
        self.lines.set_color(color);
    }

    pub fn line(&mut self, a: Vec3, b: Vec3) {
        if !self.active {
            return;
        }
        self.lines.push_pair(a, b);
    }

    /// Segment from `origin` to `origin + dir`.
    pub fn ray(&mut self, origin: Vec3, dir: Vec3) {
        if !self.active {
            return;
        }
        self.lines.push_pair(origin, origin + dir);
    }

    /// Axis-aligned cross marker of total extent `scale`.
    pub fn point(&mut self, position: Vec3, scale: f32) {
        if !self.active {
            return;
        }
        let half = scale * 0.5;
        for axis in [Vec3::Y, Vec3::X, Vec3::Z] {
            self.ray(position + axis * half, -axis * scale);
        }
    }

    /// Connects consecutive points. Fewer than two points draw nothing.
    pub fn polyline(&mut self, points: &[Vec3]) {
        if !self.active || points.len() < 2 {
            return;
        }
        for w in points.windows(2) {
            self.lines.push_pair(w[0], w[1]);
        }
    }
}
