use crate::coords::Rect;

use super::Screen;

impl Screen<'_> {
    /// Plots `f` across `rect`, one segment per pixel column.
    ///
    /// `unit` maps graph space to pixels: its origin is where graph (0, 0) sits
    /// relative to `rect`, its size is how many pixels one graph unit spans. Values
    /// are clamped to the rect's height and snapped to whole pixels; each column
    /// connects the previous sample to the current one, starting from the bottom.
    pub fn graph(&mut self, rect: Rect, unit: Rect, mut f: impl FnMut(f32) -> f32) {
        if !self.active {
            return;
        }

        let left = rect.x() as i32;
        let mut prev = 0.0f32;
        let mut i = 0i32;

        while (i as f32) < rect.width() {
            let input = -unit.x() / unit.width() + i as f32 / unit.width();
            let v = (unit.y() + f(input) * unit.height()).clamp(0.0, rect.height().max(0.0));

            let y_cur = (rect.y() + v) as i32;
            let y_prev = (rect.y() + prev) as i32;
            let column = left.saturating_add(i);
            self.line_px(column, y_cur, column.saturating_add(1), y_prev);

            prev = v;
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::draw::screen::tests::lines;

    #[test]
    fn one_segment_per_column() {
        let pts = lines(|s| s.graph(Rect::new(0.0, 0.0, 32.0, 20.0), Rect::new(0.0, 0.0, 1.0, 1.0), |x| x));
        assert_eq!(pts.len(), 32 * 2);
    }

    #[test]
    fn samples_map_through_unit_rect() {
        // graph x = (i - 10) / 2, y = 5 + 2 * f(x)
        let rect = Rect::new(100.0, 50.0, 20.0, 40.0);
        let unit = Rect::new(10.0, 5.0, 2.0, 2.0);
        let pts = lines(|s| s.graph(rect, unit, |x| x * x));

        // column 10: x = 0 -> v = 5
        assert_eq!(pts[20], Vec2::new(110.0, 55.0));
        // column 14: x = 2 -> v = 13
        assert_eq!(pts[28], Vec2::new(114.0, 63.0));
        // each segment ends at the previous sample one column right, truncated:
        // column 13 has x = 1.5 -> v = 9.5 -> 59
        assert_eq!(pts[29], Vec2::new(115.0, 59.0));
    }

    #[test]
    fn values_clamp_to_rect_height() {
        let rect = Rect::new(0.0, 0.0, 8.0, 10.0);
        let pts = lines(|s| s.graph(rect, Rect::new(0.0, 0.0, 1.0, 1.0), |_| 1000.0));
        assert!(pts.iter().all(|p| p.y >= 0.0 && p.y <= 10.0));
        assert_eq!(pts[2].y, 10.0);
    }

    #[test]
    fn zero_width_draws_nothing() {
        let pts = lines(|s| s.graph(Rect::new(0.0, 0.0, 0.0, 10.0), Rect::new(0.0, 0.0, 1.0, 1.0), |x| x));
        assert!(pts.is_empty());
    }

    #[test]
    fn columns_saturate_at_the_pixel_limit() {
        let rect = Rect::new(3.0e9, 0.0, 4.0, 10.0);
        let pts = lines(|s| s.graph(rect, Rect::new(0.0, 0.0, 1.0, 1.0), |x| x));
        assert_eq!(pts.len(), 4 * 2);
        let max = i32::MAX as f32;
        assert!(pts.iter().all(|p| p.x == max));
    }
}
