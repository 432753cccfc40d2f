use crate::session::{FrameConsumer, FrameView};

use super::vertex::{ScreenVertex, WorldVertex};

/// One of the three independently drawn vertex streams.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layer {
    /// World-space line list, drawn with the scene camera.
    WorldLines,
    /// Screen-space triangle list, drawn with the pixel projection.
    ScreenTriangles,
    /// Screen-space line list, drawn with the pixel projection over the fills.
    ScreenLines,
}

impl Layer {
    /// Back-to-front order in which a renderer should submit the layers.
    pub const DRAW_ORDER: [Layer; 3] = [Layer::WorldLines, Layer::ScreenTriangles, Layer::ScreenLines];

    #[inline]
    pub fn vertices_per_primitive(self) -> usize {
        match self {
            Layer::WorldLines | Layer::ScreenLines => 2,
            Layer::ScreenTriangles => 3,
        }
    }

    #[inline]
    pub fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            Layer::WorldLines | Layer::ScreenLines => wgpu::PrimitiveTopology::LineList,
            Layer::ScreenTriangles => wgpu::PrimitiveTopology::TriangleList,
        }
    }

    /// Primitive state with culling off; fills can wind either way.
    pub fn primitive_state(self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: self.topology(),
            cull_mode: None,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_screen_space(self) -> bool {
        !matches!(self, Layer::WorldLines)
    }
}

/// Color-resolved, GPU-ready copy of a frame.
///
/// Owns its vertex arrays and reuses them across frames; refill it from each
/// frame's [`FrameView`] (directly or by passing it to
/// [`FrameSession::present`](crate::FrameSession::present)) and upload the slices.
/// Trailing vertices that do not complete a primitive are dropped.
///
/// An inactive session never calls its consumer, so a batch presented to one
/// keeps the last active frame; call [`clear`](Self::clear) when the surface
/// goes away.
#[derive(Debug, Default)]
pub struct FrameBatch {
    world_lines: Vec<WorldVertex>,
    screen_triangles: Vec<ScreenVertex>,
    screen_lines: Vec<ScreenVertex>,
}

impl FrameBatch {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the batch contents with `frame`, resolving color runs per vertex.
    pub fn fill(&mut self, frame: &FrameView<'_>) {
        self.world_lines.clear();
        self.world_lines.extend(frame.world_lines.iter_colored().map(|(p, c)| WorldVertex {
            pos: p.to_array(),
            color: c.to_array(),
        }));
        truncate_to_primitives(&mut self.world_lines, Layer::WorldLines);

        self.screen_triangles.clear();
        self.screen_triangles.extend(frame.screen_triangles.iter_colored().map(|(p, c)| ScreenVertex {
            pos: p.to_array(),
            color: c.to_array(),
        }));
        truncate_to_primitives(&mut self.screen_triangles, Layer::ScreenTriangles);

        self.screen_lines.clear();
        self.screen_lines.extend(frame.screen_lines.iter_colored().map(|(p, c)| ScreenVertex {
            pos: p.to_array(),
            color: c.to_array(),
        }));
        truncate_to_primitives(&mut self.screen_lines, Layer::ScreenLines);
    }

    #[inline]
    pub fn world_lines(&self) -> &[WorldVertex] {
        &self.world_lines
    }

    #[inline]
    pub fn screen_triangles(&self) -> &[ScreenVertex] {
        &self.screen_triangles
    }

    #[inline]
    pub fn screen_lines(&self) -> &[ScreenVertex] {
        &self.screen_lines
    }

    /// Raw vertex bytes of `layer`, ready for a vertex buffer upload.
    pub fn bytes(&self, layer: Layer) -> &[u8] {
        match layer {
            Layer::WorldLines => bytemuck::cast_slice(&self.world_lines),
            Layer::ScreenTriangles => bytemuck::cast_slice(&self.screen_triangles),
            Layer::ScreenLines => bytemuck::cast_slice(&self.screen_lines),
        }
    }

    /// Vertices in `layer`, saturating at `u32::MAX` for draw-call ranges.
    pub fn vertex_count(&self, layer: Layer) -> u32 {
        let n = match layer {
            Layer::WorldLines => self.world_lines.len(),
            Layer::ScreenTriangles => self.screen_triangles.len(),
            Layer::ScreenLines => self.screen_lines.len(),
        };
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    /// Empties every layer. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.world_lines.clear();
        self.screen_triangles.clear();
        self.screen_lines.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.world_lines.is_empty() && self.screen_triangles.is_empty() && self.screen_lines.is_empty()
    }
}

impl FrameConsumer for FrameBatch {
    fn consume(&mut self, frame: &FrameView<'_>) {
        self.fill(frame);
    }
}

fn truncate_to_primitives<T>(vertices: &mut Vec<T>, layer: Layer) {
    let per = layer.vertices_per_primitive();
    let whole = vertices.len() - vertices.len() % per;
    if whole != vertices.len() {
        log::debug!("{layer:?}: dropping {} dangling vertices", vertices.len() - whole);
        vertices.truncate(whole);
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::buffer::{ScreenLines, ScreenTriangles, WorldLines};
    use crate::paint::Color;
    use crate::FrameSession;

    fn view<'a>(w: &'a WorldLines, l: &'a ScreenLines, t: &'a ScreenTriangles) -> FrameView<'a> {
        FrameView { world_lines: w, screen_lines: l, screen_triangles: t, frame_index: 0 }
    }

    // ── layer ─────────────────────────────────────────────────────────────

    #[test]
    fn draw_order_puts_screen_lines_last() {
        assert_eq!(Layer::DRAW_ORDER[0], Layer::WorldLines);
        assert_eq!(Layer::DRAW_ORDER[2], Layer::ScreenLines);
        assert_eq!(Layer::ScreenTriangles.topology(), wgpu::PrimitiveTopology::TriangleList);
        assert!(Layer::ScreenLines.is_screen_space());
        assert!(!Layer::WorldLines.is_screen_space());
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn fill_resolves_colors_per_vertex() {
        let mut w = WorldLines::new();
        w.push_pair(Vec3::ZERO, Vec3::X);
        w.set_color(Color::RED);
        w.push_pair(Vec3::Y, Vec3::Z);
        let (l, t) = (ScreenLines::new(), ScreenTriangles::new());

        let mut batch = FrameBatch::new();
        batch.fill(&view(&w, &l, &t));

        let colors: Vec<[f32; 4]> = batch.world_lines().iter().map(|v| v.color).collect();
        assert_eq!(colors, vec![[1.0; 4], [1.0; 4], Color::RED.to_array(), Color::RED.to_array()]);
        assert_eq!(batch.world_lines()[3].pos, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn fill_drops_incomplete_primitives() {
        let w = WorldLines::new();
        let mut l = ScreenLines::new();
        l.extend([Vec2::ZERO, Vec2::ONE, Vec2::X]);
        let mut t = ScreenTriangles::new();
        t.extend([Vec2::ZERO, Vec2::ONE, Vec2::X, Vec2::Y]);

        let mut batch = FrameBatch::new();
        batch.fill(&view(&w, &l, &t));
        assert_eq!(batch.vertex_count(Layer::ScreenLines), 2);
        assert_eq!(batch.vertex_count(Layer::ScreenTriangles), 3);
    }

    #[test]
    fn bytes_match_vertex_size() {
        let mut s = FrameSession::new();
        s.set_active(true);
        s.screen().fill_triangle(Vec2::ZERO, Vec2::X, Vec2::Y);
        s.world().line(Vec3::ZERO, Vec3::ONE);

        let mut batch = FrameBatch::new();
        s.present(&mut batch);

        assert_eq!(batch.bytes(Layer::ScreenTriangles).len(), 3 * 24);
        assert_eq!(batch.bytes(Layer::WorldLines).len(), 2 * 28);
        assert!(batch.bytes(Layer::ScreenLines).is_empty());
        assert!(s.view().is_empty());
    }

    #[test]
    fn refill_replaces_previous_frame() {
        let mut s = FrameSession::new();
        s.set_active(true);
        let mut batch = FrameBatch::new();

        s.world().sphere(Vec3::ZERO, 1.0);
        s.present(&mut batch);
        assert!(!batch.is_empty());

        s.present(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn inactive_present_keeps_last_frame_until_cleared() {
        let mut s = FrameSession::new();
        s.set_active(true);
        let mut batch = FrameBatch::new();

        s.screen().line(Vec2::ZERO, Vec2::ONE);
        s.present(&mut batch);
        s.set_active(false);
        s.present(&mut batch);
        assert_eq!(batch.vertex_count(Layer::ScreenLines), 2);

        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.vertex_count(Layer::ScreenLines), 0);
    }
}
