use crate::paint::Color;

use super::color_runs::{ColorRun, ColorRunTrack, ResolvedColors};

/// Append-only vertex stream with sparse color runs.
///
/// Point order is rendering order: line buffers are read as consecutive pairs,
/// triangle buffers as consecutive triples.
///
/// Performance characteristics:
/// - `push()` is O(1) amortized
/// - `clear()` keeps allocated capacity, so a warmed buffer stops allocating
#[derive(Debug, Clone)]
pub struct VertexBuffer<P> {
    points: Vec<P>,
    colors: ColorRunTrack,
}

impl<P> Default for VertexBuffer<P> {
    fn default() -> Self {
        Self { points: Vec::new(), colors: ColorRunTrack::new() }
    }
}

impl<P: Copy> VertexBuffer<P> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes one vertex and returns its index.
    #[inline]
    pub fn push(&mut self, point: P) -> usize {
        let index = self.points.len();
        self.points.push(point);
        index
    }

    /// Pushes a line segment.
    #[inline]
    pub fn push_pair(&mut self, a: P, b: P) {
        self.points.push(a);
        self.points.push(b);
    }

    /// Pushes one triangle.
    #[inline]
    pub fn push_triangle(&mut self, a: P, b: P, c: P) {
        self.points.push(a);
        self.points.push(b);
        self.points.push(c);
    }

    #[inline]
    pub fn extend<I: IntoIterator<Item = P>>(&mut self, points: I) {
        self.points.extend(points);
    }

    /// Colors every vertex pushed from now on, until the next call.
    ///
    /// Two calls with no push in between leave a single run holding the later color.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.colors.push(self.points.len(), color);
    }

    /// Clears points and color runs. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    #[inline]
    pub fn runs(&self) -> &[ColorRun] {
        self.colors.runs()
    }

    #[inline]
    pub fn color_track(&self) -> &ColorRunTrack {
        &self.colors
    }

    /// Effective color of every vertex, in order.
    #[inline]
    pub fn colors(&self) -> ResolvedColors<'_> {
        self.colors.resolve(self.points.len())
    }

    /// Vertices paired with their effective color.
    #[inline]
    pub fn iter_colored(&self) -> impl Iterator<Item = (P, Color)> + '_ {
        self.points.iter().copied().zip(self.colors())
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;

    // ── push / clear ──────────────────────────────────────────────────────

    #[test]
    fn push_returns_previous_len() {
        let mut buf = VertexBuffer::new();
        assert_eq!(buf.push(Vec2::ZERO), 0);
        assert_eq!(buf.push(Vec2::ONE), 1);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn n_pushes_grow_len_by_n() {
        let mut buf = VertexBuffer::new();
        buf.push(Vec3::ZERO);
        let before = buf.len();
        for i in 0..17 {
            buf.push(Vec3::splat(i as f32));
        }
        assert_eq!(buf.len(), before + 17);
    }

    #[test]
    fn clear_resets_points_and_runs() {
        let mut buf = VertexBuffer::new();
        buf.set_color(Color::RED);
        buf.push_pair(Vec2::ZERO, Vec2::ONE);
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.runs().is_empty());

        buf.clear();
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn clear_then_push_leaves_no_residue() {
        let mut buf = VertexBuffer::new();
        buf.set_color(Color::RED);
        buf.extend([Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)]);
        buf.clear();

        buf.push_pair(Vec2::new(9.0, 9.0), Vec2::new(8.0, 8.0));
        assert_eq!(buf.points(), &[Vec2::new(9.0, 9.0), Vec2::new(8.0, 8.0)]);
        assert!(buf.colors().all(|c| c == Color::WHITE));
    }

    // ── set_color ─────────────────────────────────────────────────────────

    #[test]
    fn set_color_twice_coalesces() {
        let mut buf: VertexBuffer<Vec2> = VertexBuffer::new();
        buf.push(Vec2::ZERO);
        buf.set_color(Color::RED);
        buf.set_color(Color::GREEN);
        assert_eq!(buf.runs(), &[ColorRun::new(1, Color::GREEN)]);
    }

    #[test]
    fn iter_colored_applies_runs() {
        let mut buf = VertexBuffer::new();
        buf.set_color(Color::RED);
        buf.push_triangle(Vec2::ZERO, Vec2::X, Vec2::Y);
        buf.set_color(Color::BLUE);
        buf.push_pair(Vec2::ONE, Vec2::ONE);

        let colors: Vec<Color> = buf.iter_colored().map(|(_, c)| c).collect();
        assert_eq!(colors, vec![Color::RED, Color::RED, Color::RED, Color::BLUE, Color::BLUE]);
    }
}
