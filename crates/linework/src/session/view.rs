use core::fmt;

use crate::buffer::{ScreenLines, ScreenTriangles, WorldLines};

/// Read-only borrow of one frame's buffers, handed to a [`FrameConsumer`].
#[derive(Debug, Copy, Clone)]
pub struct FrameView<'a> {
    pub world_lines: &'a WorldLines,
    pub screen_lines: &'a ScreenLines,
    pub screen_triangles: &'a ScreenTriangles,
    /// Index of the frame being consumed.
    pub frame_index: u64,
}

impl FrameView<'_> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.world_lines.is_empty() && self.screen_lines.is_empty() && self.screen_triangles.is_empty()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            world_vertices: self.world_lines.len(),
            world_runs: self.world_lines.runs().len(),
            screen_line_vertices: self.screen_lines.len(),
            screen_line_runs: self.screen_lines.runs().len(),
            screen_triangle_vertices: self.screen_triangles.len(),
            screen_triangle_runs: self.screen_triangles.runs().len(),
        }
    }
}

/// Vertex and color-run counts per buffer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub world_vertices: usize,
    pub world_runs: usize,
    pub screen_line_vertices: usize,
    pub screen_line_runs: usize,
    pub screen_triangle_vertices: usize,
    pub screen_triangle_runs: usize,
}

impl FrameStats {
    #[inline]
    pub fn total_vertices(&self) -> usize {
        self.world_vertices + self.screen_line_vertices + self.screen_triangle_vertices
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "world {} ({} runs), screen lines {} ({} runs), screen tris {} ({} runs)",
            self.world_vertices,
            self.world_runs,
            self.screen_line_vertices,
            self.screen_line_runs,
            self.screen_triangle_vertices,
            self.screen_triangle_runs,
        )
    }
}

/// Reads a finished frame. Called at most once per frame by
/// [`FrameSession::present`](super::FrameSession::present), right before the buffers
/// are cleared.
pub trait FrameConsumer {
    fn consume(&mut self, frame: &FrameView<'_>);
}

impl<F> FrameConsumer for F
where
    F: FnMut(&FrameView<'_>),
{
    #[inline]
    fn consume(&mut self, frame: &FrameView<'_>) {
        self(frame)
    }
}
