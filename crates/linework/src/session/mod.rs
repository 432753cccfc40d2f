//! Frame session: owner of the per-frame buffers and the active gate.
//!
//! Lifecycle per frame:
//! - producers draw through [`FrameSession::world`] / [`FrameSession::screen`]
//! - the renderer reads everything once via [`FrameSession::present`] (or the
//!   buffer accessors followed by [`FrameSession::clear`])
//! - buffers are empty again for the next frame's producers

mod view;

pub use view::{FrameConsumer, FrameStats, FrameView};

use crate::buffer::{ScreenLines, ScreenTriangles, WorldLines};
use crate::config::DrawSettings;
use crate::draw::{Screen, World};

/// Owns the world-line, screen-line and screen-triangle buffers for one frame.
///
/// Starts inactive: nothing is recorded until a renderer with a live surface
/// calls [`set_active(true)`](Self::set_active).
#[derive(Debug, Default)]
pub struct FrameSession {
    world_lines: WorldLines,
    screen_lines: ScreenLines,
    screen_triangles: ScreenTriangles,
    settings: DrawSettings,
    active: bool,
    frame_index: u64,
}

impl FrameSession {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: DrawSettings) -> Self {
        Self { settings, ..Self::default() }
    }

    #[inline]
    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut DrawSettings {
        &mut self.settings
    }

    // ── gate ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Opens or closes the gate. Renderers call this as their surface comes and goes.
    ///
    /// Closing the gate also drops whatever was recorded for the current frame.
    pub fn set_active(&mut self, active: bool) {
        if self.active == active {
            return;
        }
        self.active = active;
        if !active {
            self.clear();
        }
        log::debug!("frame session {}", if active { "activated" } else { "deactivated" });
    }

    // ── producers ─────────────────────────────────────────────────────────

    /// World-space drawing handle.
    #[inline]
    pub fn world(&mut self) -> World<'_> {
        World::gated(&mut self.world_lines, &self.settings, self.active)
    }

    /// Screen-space drawing handle (lines and fills).
    #[inline]
    pub fn screen(&mut self) -> Screen<'_> {
        Screen::gated(
            &mut self.screen_lines,
            &mut self.screen_triangles,
            &self.settings,
            self.active,
        )
    }

    // ── consumer ──────────────────────────────────────────────────────────

    #[inline]
    pub fn world_lines(&self) -> &WorldLines {
        &self.world_lines
    }

    #[inline]
    pub fn screen_lines(&self) -> &ScreenLines {
        &self.screen_lines
    }

    #[inline]
    pub fn screen_triangles(&self) -> &ScreenTriangles {
        &self.screen_triangles
    }

    #[inline]
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            world_lines: &self.world_lines,
            screen_lines: &self.screen_lines,
            screen_triangles: &self.screen_triangles,
            frame_index: self.frame_index,
        }
    }

    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.view().stats()
    }

    /// Frames presented so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Drops everything recorded this frame. Keeps allocated capacity for reuse.
    ///
    /// Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.world_lines.clear();
        self.screen_lines.clear();
        self.screen_triangles.clear();
    }

    /// Ends the frame: hands the buffers to `consumer` once, then clears them.
    ///
    /// An inactive session skips the consumer but still clears.
    pub fn present<C>(&mut self, consumer: &mut C)
    where
        C: FrameConsumer + ?Sized,
    {
        let view = self.view();
        if self.active {
            consumer.consume(&view);
        }
        log::trace!("frame {} presented: {}", self.frame_index, view.stats());

        self.clear();
        self.frame_index = self.frame_index.wrapping_add(1);
    }
}
