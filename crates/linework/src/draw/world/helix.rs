use glam::Vec3;

use crate::draw::math::{project_on_plane, rotate};

use super::World;

const HELIX_SAMPLES: u32 = 50;

const SPIRAL_SEGMENTS: u32 = 80;
const SPIRAL_TURN_DEG: f32 = -17.453;

impl World<'_> {
    /// Helix wound around the segment `p1..p2`.
    ///
    /// `forward` picks the starting side (projected off the axis); `angle` is the
    /// total twist in degrees over the full length.
    pub fn helix(&mut self, p1: Vec3, p2: Vec3, forward: Vec3, radius: f32, angle: f32) {
        if !self.active {
            return;
        }

        let diff = p2 - p1;
        let Some(axis) = diff.try_normalize() else {
            log::trace!("helix: coincident end points, skipped");
            return;
        };
        let Some(forward) = project_on_plane(forward, axis).try_normalize() else {
            log::trace!("helix: forward parallel to axis, skipped");
            return;
        };

        let length = diff.length();
        let twist = angle.to_radians();
        let mut p = p1 + forward * radius;

        for k in 0..=HELIX_SAMPLES {
            let f = k as f32 / HELIX_SAMPLES as f32;
            self.lines.push(p);
            p = p1 + rotate(forward, axis, f * twist) * radius + axis * (f * length);
            self.lines.push(p);
        }
    }

    /// Flat Archimedean spiral in the plane of `normal`, growing from `position`
    /// out to `radius` along a turn that starts at `forward`.
    pub fn spiral(&mut self, position: Vec3, normal: Vec3, forward: Vec3, radius: f32) {
        if !self.active {
            return;
        }
        let Some(normal) = normal.try_normalize() else {
            log::trace!("spiral: zero normal, skipped");
            return;
        };

        let grow = radius / SPIRAL_SEGMENTS as f32;
        let turn = SPIRAL_TURN_DEG.to_radians();
        let mut last = Vec3::ZERO;

        for i in 0..SPIRAL_SEGMENTS {
            let p = rotate(forward * grow * i as f32, normal, turn * i as f32);
            self.lines.push_pair(position + last, position + p);
            last = p;
        }
    }
}
