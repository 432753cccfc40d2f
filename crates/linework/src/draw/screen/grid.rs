use glam::Vec2;

use crate::coords::Rect;

use super::Screen;

impl Screen<'_> {
    /// Evenly divided grid spanning `rect`, edges included.
    ///
    /// Horizontal lines are laid from `y_max` downwards. An axis with zero
    /// divisions is skipped.
    pub fn grid(&mut self, x_divisions: u32, y_divisions: u32, rect: Rect) {
        if !self.active {
            return;
        }

        if y_divisions > 0 {
            let add = rect.height() / y_divisions as f32;
            for i in 0..=y_divisions {
                let y = rect.y_max() - i as f32 * add;
                self.lines.push_pair(Vec2::new(rect.x(), y), Vec2::new(rect.x_max(), y));
            }
        }

        if x_divisions > 0 {
            let add = rect.width() / x_divisions as f32;
            for i in 0..=x_divisions {
                let x = rect.x() + i as f32 * add;
                self.lines.push_pair(Vec2::new(x, rect.y()), Vec2::new(x, rect.y_max()));
            }
        }
    }

    /// Grid of `unit.size` cells clipped to `rect`, anchored to `unit.origin`.
    ///
    /// `unit.origin` is the scroll offset of the grid: as it moves the lines slide
    /// through `rect` instead of staying glued to its corner. Axes with a cell size
    /// of one pixel or less are skipped.
    pub fn sliding_grid(&mut self, rect: Rect, unit: Rect) {
        if !self.active {
            return;
        }

        if unit.height() > 1.0 {
            let cell = unit.height();
            let start = rect.y() + anchor_offset(unit.y(), cell);
            for k in 0..cells_until(start, rect.y_max(), cell) {
                let y = start + k as f32 * cell;
                self.lines.push_pair(Vec2::new(rect.x(), y), Vec2::new(rect.x_max(), y));
            }
        }

        if unit.width() > 1.0 {
            let cell = unit.width();
            let start = rect.x() + anchor_offset(unit.x(), cell);
            for k in 0..cells_until(start, rect.x_max(), cell) {
                let x = start + k as f32 * cell;
                self.lines.push_pair(Vec2::new(x, rect.y()), Vec2::new(x, rect.y_max()));
            }
        }
    }
}

/// Where the first line falls inside a cell, given the grid's scroll offset.
fn anchor_offset(offset: f32, cell: f32) -> f32 {
    let off = offset % cell;
    if offset < 0.0 { off + cell } else { off }
}

/// Lines at `start + k * cell` that fall before `end`.
fn cells_until(start: f32, end: f32, cell: f32) -> u32 {
    ((end - start) / cell).ceil() as u32
}
