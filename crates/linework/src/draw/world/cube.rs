use glam::Vec3;

use crate::draw::math::project_on_plane;

use super::World;

impl World<'_> {
    /// Oriented box outline.
    ///
    /// `size` is (width along right, height along up, depth along forward). `up` is
    /// made orthogonal to `forward` before use.
    pub fn cube(&mut self, center: Vec3, size: Vec3, forward: Vec3, up: Vec3) {
        if !self.active {
            return;
        }

        let Some(forward) = forward.try_normalize() else {
            log::trace!("cube: zero forward, skipped");
            return;
        };
        let Some(up) = project_on_plane(up, forward).try_normalize() else {
            log::trace!("cube: up parallel to forward, skipped");
            return;
        };
        let right = forward.cross(up);

        let f = forward * size.z * 0.5;
        let r = right * size.x * 0.5;
        let u = up * size.y * 0.5;

        let corner = |sf: f32, sr: f32, su: f32| center + f * sf + r * sr + u * su;

        // Edges along up, right, then forward; each axis has four parallel edges.
        for (a, b) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
            self.lines.push_pair(corner(a, b, -1.0), corner(a, b, 1.0));
        }
        for (a, b) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)] {
            self.lines.push_pair(corner(a, -1.0, b), corner(a, 1.0, b));
        }
        for (a, b) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            self.lines.push_pair(corner(-1.0, a, b), corner(1.0, a, b));
        }
    }
}
