use core::f32::consts::TAU;

use glam::Vec2;

use super::Screen;

impl Screen<'_> {
    /// Filled ring sector starting at 12 o'clock.
    ///
    /// `value` is a signed fraction of a full turn; its sign picks the sweep
    /// direction. The sweep advances in fixed angular steps and finishes with one
    /// partial step that lands exactly on the target angle.
    pub fn pie(&mut self, center: Vec2, inner_radius: f32, outer_radius: f32, value: f32) {
        if !self.active {
            return;
        }

        let on_arc = |theta: f32, radius: f32| {
            let (sin, cos) = theta.sin_cos();
            Vec2::new(center.x + sin * radius, center.y - cos * radius)
        };

        let sign = value.signum();
        let step = self.settings.effective_pie_step();
        let limit = (TAU * value).abs();
        let steps = (limit / step).ceil() as u32;

        let mut prev_in = on_arc(0.0, inner_radius);
        let mut prev_out = on_arc(0.0, outer_radius);

        for k in 0..steps {
            let theta = k as f32 * step * sign;
            let cur_in = on_arc(theta, inner_radius);
            let cur_out = on_arc(theta, outer_radius);
            self.push_ring_quad(prev_in, prev_out, cur_in, cur_out);
            prev_in = cur_in;
            prev_out = cur_out;
        }

        let end = limit * sign;
        let cur_in = on_arc(end, inner_radius);
        let cur_out = on_arc(end, outer_radius);
        self.push_ring_quad(prev_in, prev_out, cur_in, cur_out);
    }

    fn push_ring_quad(&mut self, prev_in: Vec2, prev_out: Vec2, cur_in: Vec2, cur_out: Vec2) {
        self.triangles.push_triangle(prev_in, prev_out, cur_out);
        self.triangles.push_triangle(cur_out, cur_in, prev_in);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawSettings;
    use crate::draw::screen::tests::{close, triangles};
    use crate::FrameSession;

    fn session_pie(settings: DrawSettings, value: f32) -> Vec<Vec2> {
        let mut s = FrameSession::with_settings(settings);
        s.set_active(true);
        s.screen().pie(Vec2::ZERO, 1.0, 2.0, value);
        s.screen_triangles().points().to_vec()
    }

    fn area(tri: &[Vec2]) -> f32 {
        ((tri[1] - tri[0]).perp_dot(tri[2] - tri[0])).abs() * 0.5
    }

    #[test]
    fn zero_value_is_only_a_degenerate_closing_quad() {
        let pts = triangles(|s| s.pie(Vec2::new(50.0, 50.0), 10.0, 20.0, 0.0));
        assert_eq!(pts.len(), 6);
        assert!(pts.chunks(3).all(|t| area(t) < 1e-4));
    }

    #[test]
    fn emits_whole_triangles() {
        for v in [0.1, 0.25, 0.5, 0.99, -0.4] {
            let pts = triangles(|s| s.pie(Vec2::ZERO, 5.0, 10.0, v));
            assert_eq!(pts.len() % 6, 0);
        }
    }

    #[test]
    fn half_turn_steps_then_closes() {
        // limit = pi: steps at 0.0, 0.3, .., 3.0 then the closing segment
        let pts = triangles(|s| s.pie(Vec2::ZERO, 5.0, 10.0, 0.5));
        assert_eq!(pts.len(), (11 + 1) * 6);
    }

    #[test]
    fn closing_segment_lands_on_target_angle() {
        let c = Vec2::new(100.0, 100.0);
        let pts = triangles(|s| s.pie(c, 5.0, 10.0, 0.5));
        // last quad: (prev_in, prev_out, cur_out), (cur_out, cur_in, prev_in)
        let n = pts.len();
        assert!(close(pts[n - 3], Vec2::new(100.0, 110.0)));
        assert!(close(pts[n - 2], Vec2::new(100.0, 105.0)));
    }

    #[test]
    fn sign_picks_sweep_direction() {
        let c = Vec2::ZERO;
        let cw = triangles(|s| s.pie(c, 1.0, 2.0, 0.25));
        let ccw = triangles(|s| s.pie(c, 1.0, 2.0, -0.25));
        let n = cw.len();
        assert!(close(cw[n - 3], Vec2::new(2.0, 0.0)));
        assert!(close(ccw[ccw.len() - 3], Vec2::new(-2.0, 0.0)));
        assert!(n > 6);
    }

    #[test]
    fn covered_area_matches_ring_sector() {
        let (inner, outer, value) = (4.0f32, 9.0f32, 0.3f32);
        let pts = triangles(|s| s.pie(Vec2::ZERO, inner, outer, value));
        let total: f32 = pts.chunks(3).map(area).sum();
        let exact = 0.5 * (outer * outer - inner * inner) * TAU * value;
        // chords cut a little off each arc
        assert!(total < exact && total > exact * 0.97);
    }

    // ── settings ──────────────────────────────────────────────────────────

    #[test]
    fn step_comes_from_settings() {
        // half turn: pi / 0.3 -> 11 steps, pi / 0.5 -> 7 steps, plus the closing quad
        let default = session_pie(DrawSettings::default(), 0.5);
        let coarse = session_pie(DrawSettings::default().with_pie_step(0.5), 0.5);
        assert_eq!(default.len(), (11 + 1) * 6);
        assert_eq!(coarse.len(), (7 + 1) * 6);
    }

    #[test]
    fn zero_step_written_directly_still_terminates() {
        let mut s = FrameSession::new();
        s.set_active(true);
        s.settings_mut().pie_step = 0.0;
        s.screen().pie(Vec2::new(50.0, 50.0), 5.0, 10.0, 0.5);

        // clamped to 1e-3 rad: ceil(pi / 1e-3) steps plus the closing quad
        let expected = ((core::f32::consts::PI / 1e-3).ceil() as usize + 1) * 6;
        assert_eq!(s.screen_triangles().len(), expected);
    }

    #[test]
    fn negative_step_keeps_the_sweep_direction() {
        let mut settings = DrawSettings::default();
        settings.pie_step = -0.3;
        let flipped = session_pie(settings, 0.25);
        let normal = session_pie(DrawSettings::default(), 0.25);
        assert_eq!(flipped, normal);

        // first stepped outer point sits clockwise of 12 o'clock (positive x)
        assert!(flipped[8].x > 0.0);
    }

    #[test]
    fn nan_value_only_closes() {
        let pts = session_pie(DrawSettings::default(), f32::NAN);
        assert_eq!(pts.len(), 6);
    }
}
