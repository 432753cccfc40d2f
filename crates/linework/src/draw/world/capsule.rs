use glam::Vec3;

use crate::draw::math::{perpendicular, slerp};

use super::World;

/// Segments per hemispherical arc on a capsule end.
const CAP_ARC_SEGMENTS: u32 = 25;

/// Local frame around a capsule/cylinder axis, each vector scaled to `radius`.
struct AxisFrame {
    dir: Vec3,
    up: Vec3,
    forward: Vec3,
    right: Vec3,
}

impl AxisFrame {
    fn new(start: Vec3, end: Vec3, radius: f32) -> Option<Self> {
        if radius <= 0.0 {
            return None;
        }
        let dir = (end - start).try_normalize()?;
        let up = dir * radius;
        let forward = perpendicular(dir)? * radius;
        let right = up.cross(forward).normalize() * radius;
        Some(Self { dir, up, forward, right })
    }

    /// The four equatorial directions around the axis.
    fn rim(&self) -> [Vec3; 4] {
        [self.right, -self.right, self.forward, -self.forward]
    }
}

impl World<'_> {
    /// Capsule whose hemispherical ends touch `start` and `end`.
    ///
    /// If the segment is shorter than the diameter the cylinder part collapses and
    /// the two hemispheres share the midpoint.
    pub fn capsule(&mut self, start: Vec3, end: Vec3, radius: f32) {
        if !self.active {
            return;
        }
        let Some(frame) = AxisFrame::new(start, end, radius) else {
            log::trace!("capsule: degenerate axis or radius, skipped");
            return;
        };

        let height = start.distance(end);
        let side = (height * 0.5 - radius).max(0.0);
        let middle = (start + end) * 0.5;
        let start = middle - frame.dir * side;
        let end = middle + frame.dir * side;

        self.circle_default(start, radius, frame.up);
        self.circle_default(end, radius, -frame.up);

        for rim in frame.rim() {
            self.line(start + rim, end + rim);
        }

        let n = CAP_ARC_SEGMENTS as f32;
        for i in 1..=CAP_ARC_SEGMENTS {
            let t = i as f32 / n;
            let t_prev = (i - 1) as f32 / n;

            for rim in frame.rim() {
                self.line(slerp(rim, -frame.up, t) + start, slerp(rim, -frame.up, t_prev) + start);
            }
            for rim in frame.rim() {
                self.line(slerp(rim, frame.up, t) + end, slerp(rim, frame.up, t_prev) + end);
            }
        }
    }

    /// Cylinder with rings at both ends and the middle.
    pub fn cylinder(&mut self, start: Vec3, end: Vec3, radius: f32) {
        if !self.active {
            return;
        }
        let Some(frame) = AxisFrame::new(start, end, radius) else {
            log::trace!("cylinder: degenerate axis or radius, skipped");
            return;
        };

        self.circle_default(start, radius, frame.up);
        self.circle_default(end, radius, -frame.up);
        self.circle_default((start + end) * 0.5, radius, frame.up);

        for rim in frame.rim() {
            self.line(start + rim, end + rim);
        }

        for cap in [start, end] {
            self.line(cap - frame.right, cap + frame.right);
            self.line(cap - frame.forward, cap + frame.forward);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::world::tests::emit;

    /// Distance from `p` to the segment `a..b`.
    fn segment_distance(p: Vec3, a: Vec3, b: Vec3) -> f32 {
        let ab = b - a;
        let t = ((p - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
        p.distance(a + ab * t)
    }

    // ── capsule ───────────────────────────────────────────────────────────

    #[test]
    fn capsule_point_count() {
        let pts = emit(|w| w.capsule(Vec3::ZERO, Vec3::Y * 4.0, 1.0));
        // two 101-segment rings, four rails, 25 segments x 8 arcs
        assert_eq!(pts.len(), 2 * 202 + 8 + 25 * 8 * 2);
    }

    #[test]
    fn capsule_stays_within_radius_of_inner_axis() {
        let (a, b) = (Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 6.0));
        let pts = emit(|w| w.capsule(a, b, 1.5));
        let (ia, ib) = (Vec3::new(1.0, 0.0, 1.5), Vec3::new(1.0, 0.0, 4.5));
        for p in pts {
            assert!((segment_distance(p, ia, ib) - 1.5).abs() < 1e-3, "{p}");
        }
    }

    #[test]
    fn capsule_arcs_reach_the_original_end_points() {
        let (a, b) = (Vec3::ZERO, Vec3::X * 5.0);
        let pts = emit(|w| w.capsule(a, b, 1.0));
        assert!(pts.iter().any(|p| p.distance(a) < 1e-3));
        assert!(pts.iter().any(|p| p.distance(b) < 1e-3));
    }

    #[test]
    fn short_capsule_collapses_to_sphere() {
        let pts = emit(|w| w.capsule(Vec3::ZERO, Vec3::Y, 2.0));
        let mid = Vec3::Y * 0.5;
        for p in pts {
            assert!((p.distance(mid) - 2.0).abs() < 1e-3);
        }
    }

    #[test]
    fn capsule_degenerate_input_emits_nothing() {
        assert!(emit(|w| w.capsule(Vec3::ONE, Vec3::ONE, 1.0)).is_empty());
        assert!(emit(|w| w.capsule(Vec3::ZERO, Vec3::Y, 0.0)).is_empty());
    }

    // ── cylinder ──────────────────────────────────────────────────────────

    #[test]
    fn cylinder_point_count() {
        let pts = emit(|w| w.cylinder(Vec3::ZERO, Vec3::Z * 3.0, 0.5));
        assert_eq!(pts.len(), 3 * 202 + 8 + 8);
    }

    #[test]
    fn cylinder_points_are_radius_from_axis() {
        let (a, b) = (Vec3::ZERO, Vec3::Z * 3.0);
        let pts = emit(|w| w.cylinder(a, b, 0.5));
        for p in pts {
            let d = segment_distance(p, a, b);
            // cap cross lines pass through the axis; everything else sits on the rim
            assert!(d < 0.5 + 1e-3);
        }
    }
}
