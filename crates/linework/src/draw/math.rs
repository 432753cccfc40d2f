//! Small vector helpers shared by the world-space generators.

use core::f32::consts::PI;

use glam::{Quat, Vec3};

const EPS: f32 = 1e-6;

/// Removes the component of `v` along `normal`.
#[inline]
pub(crate) fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    let n2 = normal.length_squared();
    if n2 < EPS {
        return v;
    }
    v - normal * (v.dot(normal) / n2)
}

/// A unit vector orthogonal to `axis`.
///
/// World up projected onto the plane of `axis`, or world forward when `axis`
/// is (anti)parallel to up. Returns `None` for a zero axis.
pub(crate) fn perpendicular(axis: Vec3) -> Option<Vec3> {
    let axis = axis.try_normalize()?;
    let reference = if axis.dot(Vec3::Y).abs() > 0.999 { Vec3::Z } else { Vec3::Y };
    project_on_plane(reference, axis).try_normalize()
}

/// Rotates `v` by `radians` about the unit vector `axis`.
#[inline]
pub(crate) fn rotate(v: Vec3, axis: Vec3, radians: f32) -> Vec3 {
    Quat::from_axis_angle(axis, radians) * v
}

/// Spherical interpolation of direction, linear interpolation of length.
///
/// `t = 0` yields `a`, `t = 1` yields `b`. Opposite vectors turn about
/// [`perpendicular`] of `a`.
pub(crate) fn slerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    let (Some(ua), Some(ub)) = (a.try_normalize(), b.try_normalize()) else {
        return a.lerp(b, t);
    };

    let len_a = a.length();
    let length = len_a + (b.length() - len_a) * t;

    let angle = ua.dot(ub).clamp(-1.0, 1.0).acos();
    let dir = if angle < 1e-4 {
        ua.lerp(ub, t).normalize_or_zero()
    } else if PI - angle < 1e-4 {
        match perpendicular(ua) {
            Some(p) => rotate(ua, ua.cross(p).normalize(), angle * t),
            None => ua,
        }
    } else {
        let s = angle.sin();
        ua * (((1.0 - t) * angle).sin() / s) + ub * ((t * angle).sin() / s)
    };

    dir * length
}

/// Distance along `dir` from `origin` to the plane through `point` with `normal`.
///
/// `None` when the ray is parallel to the plane or the plane is behind the origin.
pub(crate) fn ray_plane(origin: Vec3, dir: Vec3, point: Vec3, normal: Vec3) -> Option<f32> {
    let dir = dir.try_normalize()?;
    let normal = normal.try_normalize()?;

    let denom = dir.dot(normal);
    if denom.abs() < EPS {
        return None;
    }

    let t = (point - origin).dot(normal) / denom;
    (t >= 0.0).then_some(t)
}
