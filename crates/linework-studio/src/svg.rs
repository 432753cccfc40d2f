use std::fmt::Write as _;

use glam::{Mat4, Vec2, Vec3};
use linework::{Color, FrameConsumer, FrameView, Viewport};

/// Writes a frame as an SVG document, one `<line>` or `<polygon>` per primitive.
///
/// World lines are projected with `view_proj`; segments with an endpoint behind
/// the camera are skipped. Screen layers are flipped from bottom-left pixels to
/// SVG's top-left origin.
pub struct SvgFrame {
    viewport: Viewport,
    view_proj: Mat4,
    body: String,
    skipped: usize,
}

impl SvgFrame {
    pub fn new(viewport: Viewport, view_proj: Mat4) -> Self {
        Self { viewport, view_proj, body: String::new(), skipped: 0 }
    }

    /// Finished document, background included.
    pub fn document(&self) -> String {
        let (w, h) = (self.viewport.width, self.viewport.height);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"#14161a\"/>\n{}</svg>\n",
            self.body
        )
    }

    /// World segments dropped because they crossed behind the camera.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn world_to_svg(&self, p: Vec3) -> Option<Vec2> {
        let clip = self.view_proj * p.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - ndc.y) * 0.5 * self.viewport.height,
        ))
    }

    fn screen_to_svg(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, self.viewport.height - p.y)
    }

    fn line(&mut self, a: Vec2, b: Vec2, color: Color) {
        let [r, g, bl, _] = color.to_rgba_u8();
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"rgb({r},{g},{bl})\" stroke-opacity=\"{:.3}\"/>",
            a.x, a.y, b.x, b.y, color.a
        );
    }

    fn triangle(&mut self, pts: [Vec2; 3], color: Color) {
        let [r, g, b, _] = color.to_rgba_u8();
        let _ = writeln!(
            self.body,
            "<polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" fill=\"rgb({r},{g},{b})\" fill-opacity=\"{:.3}\"/>",
            pts[0].x, pts[0].y, pts[1].x, pts[1].y, pts[2].x, pts[2].y, color.a
        );
    }
}

impl FrameConsumer for SvgFrame {
    fn consume(&mut self, frame: &FrameView<'_>) {
        self.body.clear();
        self.skipped = 0;

        let world: Vec<(Vec3, Color)> = frame.world_lines.iter_colored().collect();
        for pair in world.chunks_exact(2) {
            match (self.world_to_svg(pair[0].0), self.world_to_svg(pair[1].0)) {
                (Some(a), Some(b)) => self.line(a, b, pair[0].1),
                _ => self.skipped += 1,
            }
        }

        let fills: Vec<(Vec2, Color)> = frame.screen_triangles.iter_colored().collect();
        for tri in fills.chunks_exact(3) {
            let pts = [tri[0].0, tri[1].0, tri[2].0].map(|p| self.screen_to_svg(p));
            self.triangle(pts, tri[0].1);
        }

        let lines: Vec<(Vec2, Color)> = frame.screen_lines.iter_colored().collect();
        for pair in lines.chunks_exact(2) {
            let (a, b) = (self.screen_to_svg(pair[0].0), self.screen_to_svg(pair[1].0));
            self.line(a, b, pair[0].1);
        }
    }
}
