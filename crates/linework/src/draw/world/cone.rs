use glam::Vec3;

use crate::draw::math::{perpendicular, ray_plane, slerp};

use super::World;

const DEFAULT_CONE_ANGLE: f32 = 45.0;
const ARROW_HEAD_ANGLE: f32 = 15.0;
const ARROW_HEAD_LENGTH: f32 = 0.333;

impl World<'_> {
    /// Cone with its apex at `position`, opening along `direction`.
    ///
    /// `direction` sets both the axis and the height (its length). `angle` is the
    /// half-angle in degrees. Four silhouette rays are cast from the apex onto the
    /// cap plane, so they end exactly on the cap for any angle below 90.
    pub fn cone(&mut self, position: Vec3, direction: Vec3, angle: f32) {
        if !self.active {
            return;
        }

        let length = direction.length();
        let Some(axis) = direction.try_normalize() else {
            log::trace!("cone: zero direction, skipped");
            return;
        };
        let Some(perp) = perpendicular(axis) else {
            return;
        };

        let forward = direction;
        let up = perp * length;
        let right = forward.cross(up).normalize() * length;

        let t = angle / 90.0;
        let slant = slerp(forward, up, t);

        let cap_center = position + forward;
        let Some(dist) = ray_plane(position, slant, cap_center, -axis) else {
            log::trace!("cone: half-angle {angle} does not meet the cap plane, skipped");
            return;
        };
        let slant = slant.normalize() * dist;

        self.ray(position, slant);
        self.ray(position, slerp(forward, -up, t).normalize() * dist);
        self.ray(position, slerp(forward, right, t).normalize() * dist);
        self.ray(position, slerp(forward, -right, t).normalize() * dist);

        self.circle_default(cap_center, (forward - slant).length(), axis);
        self.circle_default(position + forward * 0.5, (forward * 0.5 - slant * 0.5).length(), axis);
    }

    /// [`cone`](Self::cone) with a 45 degree half-angle.
    pub fn cone_default(&mut self, position: Vec3, direction: Vec3) {
        self.cone(position, direction, DEFAULT_CONE_ANGLE);
    }

    /// Shaft from `position` to `position + direction` with a cone head at the tip.
    pub fn arrow(&mut self, position: Vec3, direction: Vec3) {
        if !self.active {
            return;
        }
        self.ray(position, direction);
        self.cone(position + direction, -direction * ARROW_HEAD_LENGTH, ARROW_HEAD_ANGLE);
    }
}
