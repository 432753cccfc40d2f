use glam::Vec3;

use super::World;

const SPHERE_SEGMENTS: u32 = 36;

impl World<'_> {
    /// Wire sphere made of three axis-aligned great circles.
    pub fn sphere(&mut self, position: Vec3, radius: f32) {
        if !self.active {
            return;
        }

        let on_circles = |angle: f32| {
            let (s, c) = angle.sin_cos();
            [
                position + Vec3::new(0.0, s, c) * radius,
                position + Vec3::new(c, 0.0, s) * radius,
                position + Vec3::new(c, s, 0.0) * radius,
            ]
        };

        let step = 10f32.to_radians();
        let mut prev = on_circles(0.0);

        for i in 1..=SPHERE_SEGMENTS {
            let next = on_circles(i as f32 * step);
            for (a, b) in prev.iter().zip(&next) {
                self.lines.push_pair(*a, *b);
            }
            prev = next;
        }
    }
}
