use glam::Vec3;

use crate::draw::math::{perpendicular, rotate};

use super::World;

impl World<'_> {
    /// Circle of `radius` around `center` in the plane orthogonal to `normal`.
    ///
    /// Emits `interpolations + 1` segments; the first one is degenerate (it starts
    /// and ends on the reference point).
    pub fn circle(&mut self, center: Vec3, radius: f32, normal: Vec3, interpolations: u32) {
        if !self.active {
            return;
        }
        if interpolations == 0 {
            return;
        }

        let (Some(normal), Some(reference)) = (normal.try_normalize(), perpendicular(normal)) else {
            log::trace!("circle: zero normal, skipped");
            return;
        };

        let step = core::f32::consts::TAU / interpolations as f32;
        let mut p = center + reference * radius;

        for i in 0..=interpolations {
            self.lines.push(p);
            p = center + rotate(reference, normal, i as f32 * step) * radius;
            self.lines.push(p);
        }
    }

    /// [`circle`](Self::circle) with the configured segment count.
    pub fn circle_default(&mut self, center: Vec3, radius: f32, normal: Vec3) {
        let segments = self.settings.world_circle_segments;
        self.circle(center, radius, normal, segments);
    }
}
