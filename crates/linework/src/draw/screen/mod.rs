//! Screen-space generators.
//!
//! Outlines go to the screen line list (pairs); fills go to the screen triangle
//! list (triples). Shape-specific code lives in one file per shape family.

mod ellipse;
mod graph;
mod grid;
mod pie;
mod rect;
mod slider;

use glam::Vec2;

use crate::buffer::{ScreenLines, ScreenTriangles};
use crate::config::DrawSettings;
use crate::paint::Color;

/// Drawing handle for the two screen-space buffers.
///
/// Obtained from [`FrameSession::screen`](crate::FrameSession::screen). When the
/// session is inactive every call returns before touching either buffer.
pub struct Screen<'a> {
    lines: &'a mut ScreenLines,
    triangles: &'a mut ScreenTriangles,
    settings: &'a DrawSettings,
    active: bool,
}

impl<'a> Screen<'a> {
    /// Wraps standalone buffers. The handle is always active.
    #[inline]
    pub fn new(
        lines: &'a mut ScreenLines,
        triangles: &'a mut ScreenTriangles,
        settings: &'a DrawSettings,
    ) -> Self {
        Self { lines, triangles, settings, active: true }
    }

    #[inline]
    pub(crate) fn gated(
        lines: &'a mut ScreenLines,
        triangles: &'a mut ScreenTriangles,
        settings: &'a DrawSettings,
        active: bool,
    ) -> Self {
        Self { lines, triangles, settings, active }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Colors every screen line vertex appended after this call.
    pub fn set_color(&mut self, color: Color) {
        if !self.active {
            return;
        }
        self.lines.set_color(color);
    }

    /// Colors every filled vertex appended after this call.
    pub fn set_fill_color(&mut self, color: Color) {
        if !self.active {
            return;
        }
        self.triangles.set_color(color);
    }

    pub fn line(&mut self, a: Vec2, b: Vec2) {
        if !self.active {
            return;
        }
        self.lines.push_pair(a, b);
    }

    /// Line between integer pixel coordinates.
    pub fn line_px(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.line(Vec2::new(x1 as f32, y1 as f32), Vec2::new(x2 as f32, y2 as f32));
    }

    /// Connects consecutive points. Fewer than two points draw nothing.
    pub fn multi_line(&mut self, points: &[Vec2]) {
        self.multi_line_scaled(points, Vec2::ZERO, 1.0);
    }

    /// Like [`multi_line`](Self::multi_line) with every point mapped to
    /// `offset + p * scale`.
    pub fn multi_line_scaled(&mut self, points: &[Vec2], offset: Vec2, scale: f32) {
        if !self.active || points.len() < 2 {
            return;
        }
        for w in points.windows(2) {
            self.lines.push_pair(offset + w[0] * scale, offset + w[1] * scale);
        }
    }
}
