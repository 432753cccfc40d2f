use glam::Mat4;

use crate::coords::Viewport;

/// Straight-alpha blending. Vertex colors are not premultiplied.
#[inline]
pub fn blend_state() -> wgpu::BlendState {
    wgpu::BlendState::ALPHA_BLENDING
}

/// Orthographic projection mapping pixels to clip space, origin bottom-left.
///
/// Depth is flat: screen layers are drawn in submission order with no depth test.
pub fn pixel_projection(viewport: Viewport) -> Mat4 {
    if !viewport.is_valid() {
        log::debug!("pixel_projection: invalid viewport {viewport:?}, using identity");
        return Mat4::IDENTITY;
    }
    Mat4::orthographic_rh(0.0, viewport.width, 0.0, viewport.height, -1.0, 1.0)
}
