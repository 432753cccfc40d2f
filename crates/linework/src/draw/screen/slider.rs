use crate::coords::Rect;
use crate::paint::Color;

use super::Screen;

impl Screen<'_> {
    /// Progress bar: a translucent track with `value` (0..=1) of it filled in `color`.
    ///
    /// The fill width is truncated to whole pixels.
    pub fn slider(&mut self, value: f32, x: i32, y: i32, color: Color, width: i32) {
        if !self.active {
            return;
        }
        let value = value.clamp(0.0, 1.0);
        let (x, y, width) = (x as f32, y as f32, width as f32);
        let height = self.settings.slider_height;

        self.set_fill_color(self.settings.slider_track);
        self.fill_rect(Rect::new(x, y, width, height));

        self.set_fill_color(color);
        self.fill_rect(Rect::new(x, y, (value * width).trunc(), height));
    }

    /// Centered bar for `value` in -1..=1: filled from the middle to the left
    /// for negative values and to the right for positive ones.
    pub fn mid_slider(&mut self, value: f32, x: i32, y: i32, color: Color, width: i32) {
        if !self.active {
            return;
        }
        let value = value.clamp(-1.0, 1.0);
        let (x, y, width) = (x as f32, y as f32, width as f32);
        let height = self.settings.slider_height;

        self.set_fill_color(self.settings.slider_track);
        self.fill_rect(Rect::new(x, y, width, height));

        self.set_fill_color(color);
        self.fill_rect(Rect::new(x + width * 0.5, y, (value * 0.5 * width).trunc(), height));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::buffer::ColorRun;
    use crate::draw::screen::tests::emit;

    #[test]
    fn slider_draws_track_then_fill() {
        let (_, tris) = emit(|s| s.slider(0.5, 10, 20, Color::GREEN, 101));
        assert_eq!(tris.len(), 12);
        assert_eq!(
            tris.runs(),
            &[ColorRun::new(0, Color::WHITE.with_alpha(0.2)), ColorRun::new(6, Color::GREEN)]
        );
        // fill: 0.5 * 101 truncates to 50
        assert_eq!(tris.points()[7], Vec2::new(60.0, 20.0));
        assert_eq!(tris.points()[11], Vec2::new(10.0, 30.0));
    }

    #[test]
    fn slider_clamps_value() {
        let (_, tris) = emit(|s| s.slider(3.0, 0, 0, Color::RED, 80));
        assert_eq!(tris.points()[7].x, 80.0);
    }

    #[test]
    fn mid_slider_fills_from_the_center() {
        let (_, tris) = emit(|s| s.mid_slider(-0.5, 0, 0, Color::RED, 100));
        let fill = &tris.points()[6..];
        assert_eq!(fill[0], Vec2::new(50.0, 0.0));
        assert_eq!(fill[1], Vec2::new(25.0, 0.0));
    }
}
