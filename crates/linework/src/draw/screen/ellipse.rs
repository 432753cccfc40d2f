use core::f32::consts::TAU;

use glam::Vec2;

use super::Screen;

impl Screen<'_> {
    /// Axis-aligned ellipse outline with radii `size`.
    ///
    /// Emits `interpolations` segments around the curve plus an explicit closing
    /// segment back to the first vertex (`2 * interpolations + 2` points).
    pub fn ellipse(&mut self, center: Vec2, size: Vec2, interpolations: u32) {
        if !self.active {
            return;
        }

        let start = Vec2::new(center.x + size.x, center.y);
        let step = if interpolations > 0 { TAU / interpolations as f32 } else { 0.0 };
        let mut p = start;

        for i in 0..interpolations {
            let (sin, cos) = (i as f32 * step).sin_cos();
            self.lines.push(p);
            p = center + Vec2::new(cos * size.x, sin * size.y);
            self.lines.push(p);
        }

        self.lines.push_pair(p, start);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, interpolations: u32) {
        self.ellipse(center, Vec2::splat(radius), interpolations);
    }

    /// [`circle`](Self::circle) with the configured segment count.
    pub fn circle_default(&mut self, center: Vec2, radius: f32) {
        let segments = self.settings.screen_circle_segments;
        self.circle(center, radius, segments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::screen::tests::{close, lines};

    #[test]
    fn emits_two_n_plus_two_points() {
        for n in [1, 3, 40, 64] {
            let pts = lines(|s| s.circle(Vec2::new(5.0, 5.0), 3.0, n));
            assert_eq!(pts.len(), 2 * n as usize + 2);
        }
    }

    #[test]
    fn first_and_last_points_coincide() {
        let pts = lines(|s| s.ellipse(Vec2::new(10.0, 20.0), Vec2::new(4.0, 2.0), 12));
        assert_eq!(pts[0], pts[pts.len() - 1]);
        assert_eq!(pts[0], Vec2::new(14.0, 20.0));
    }

    #[test]
    fn points_lie_on_the_ellipse() {
        let (c, r) = (Vec2::new(-3.0, 7.0), Vec2::new(6.0, 2.0));
        for p in lines(|s| s.ellipse(c, r, 20)) {
            let q = (p - c) / r;
            assert!((q.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn segments_chain_end_to_start() {
        let pts = lines(|s| s.circle(Vec2::ZERO, 1.0, 8));
        for (a, b) in pts.chunks(2).zip(pts.chunks(2).skip(1)) {
            assert!(close(a[1], b[0]));
        }
    }

    #[test]
    fn default_uses_forty_segments() {
        assert_eq!(lines(|s| s.circle_default(Vec2::ZERO, 2.0)).len(), 82);
    }
}
