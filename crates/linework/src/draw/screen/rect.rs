use glam::Vec2;

use crate::coords::Rect;

use super::Screen;

impl Screen<'_> {
    /// Rectangle outline (four segments).
    pub fn rect(&mut self, rect: Rect) {
        if !self.active {
            return;
        }
        let (x0, y0, x1, y1) = (rect.x(), rect.y(), rect.x_max(), rect.y_max());
        let corners = [
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ];
        for i in 0..4 {
            self.lines.push_pair(corners[i], corners[(i + 1) % 4]);
        }
    }

    /// Filled rectangle as two triangles.
    pub fn fill_rect(&mut self, rect: Rect) {
        if !self.active {
            return;
        }
        let p0 = rect.min();
        let p1 = Vec2::new(rect.x_max(), rect.y());
        let p2 = Vec2::new(rect.x(), rect.y_max());
        let p3 = rect.max();

        self.triangles.push_triangle(p0, p1, p2);
        self.triangles.push_triangle(p1, p3, p2);
    }

    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        if !self.active {
            return;
        }
        self.triangles.push_triangle(a, b, c);
    }

    /// Triangle fan around `points[0]`. Fewer than three points fill nothing.
    pub fn fill_fan(&mut self, points: &[Vec2]) {
        if !self.active || points.len() < 3 {
            return;
        }
        let hub = points[0];
        for w in points[1..].windows(2) {
            self.triangles.push_triangle(hub, w[0], w[1]);
        }
    }
}
