use core::f32::consts::PI;

use glam::Vec3;

use crate::draw::math::project_on_plane;

use super::World;

/// Hyperbola points past the asymptote are pushed this far out (sign flipped).
const HYPERBOLA_FAR: f32 = -100.0;

impl World<'_> {
    /// Draws a conic section with its focus at `center` and periapsis towards
    /// `periapsis_dir`.
    ///
    /// `eccentricity` picks the curve: 0 circle, (0, 1) ellipse, 1 parabola,
    /// above 1 hyperbola (pass a negative `semi_major_axis` for those). Only the
    /// branch around the focus is drawn.
    ///
    /// The curve is traced from the periapsis outwards on both sides of the axis,
    /// `steps` increments over half a turn each.
    pub fn conic_section(
        &mut self,
        center: Vec3,
        eccentricity: f32,
        semi_major_axis: f32,
        normal: Vec3,
        periapsis_dir: Vec3,
        steps: i32,
    ) {
        if !self.active {
            return;
        }

        let semilatus = if eccentricity == 1.0 {
            semi_major_axis
        } else {
            semi_major_axis * (1.0 - eccentricity * eccentricity)
        };
        if semilatus <= 0.0 {
            log::trace!("conic_section: semi-latus rectum {semilatus} <= 0, skipped");
            return;
        }

        let steps = if steps > 0 {
            steps
        } else if self.settings.conic_steps > 0 {
            self.settings.conic_steps
        } else {
            10
        };
        let eccentricity = eccentricity.max(0.0);

        let Some(periapsis) = project_on_plane(periapsis_dir, normal).try_normalize() else {
            log::trace!("conic_section: periapsis direction parallel to normal, skipped");
            return;
        };
        let Some(right) = periapsis.cross(normal).try_normalize() else {
            log::trace!("conic_section: zero normal, skipped");
            return;
        };

        let step = PI / steps as f32;
        let mut prev_left = Vec3::ZERO;
        let mut prev_right = Vec3::ZERO;

        for i in 0..=steps {
            let theta = i as f32 * step;
            let (sin, cos) = theta.sin_cos();

            let mut r = semilatus / (1.0 + eccentricity * cos);
            if !r.is_finite() {
                break;
            }
            let past_asymptote = r < 0.0;
            if past_asymptote {
                r *= HYPERBOLA_FAR;
            }

            let side = right * sin * r;
            let along = periapsis * cos * r;

            let left = center - side + along;
            if i > 0 {
                self.lines.push(prev_left);
            }
            self.lines.push(left);
            prev_left = left;

            let rgt = center + side + along;
            if i > 0 {
                self.lines.push(prev_right);
            }
            self.lines.push(rgt);
            prev_right = rgt;

            if past_asymptote {
                break;
            }
        }
    }

    /// Draws an orbit given its periapsis and apoapsis distances from the focus.
    pub fn conic_section_using_apses(
        &mut self,
        center: Vec3,
        periapsis: f32,
        apoapsis: f32,
        normal: Vec3,
        forward: Vec3,
        steps: i32,
    ) {
        if !self.active {
            return;
        }

        let semi_major_axis = (periapsis + apoapsis) / 2.0;
        let eccentricity = (apoapsis - periapsis) / (apoapsis + periapsis);

        self.conic_section(center, eccentricity, semi_major_axis, normal, forward, steps);
    }
}
