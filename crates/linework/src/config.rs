use crate::paint::Color;

const MIN_PIE_STEP: f32 = 1e-3;

/// Defaults used by generator overloads that do not take an explicit count or style.
///
/// Explicit arguments always win; these only fill in what the caller left out.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSettings {
    /// Segments for `Screen::circle_default`.
    pub screen_circle_segments: u32,
    /// Segments for `World::circle_default` and the circles inside composite shapes.
    pub world_circle_segments: u32,
    /// Steps used by conic sections when the caller passes a non-positive count.
    pub conic_steps: i32,
    /// Angular step of pie sectors, in radians. Read through
    /// [`effective_pie_step`](Self::effective_pie_step).
    pub pie_step: f32,
    /// Slider bar height in pixels.
    pub slider_height: f32,
    /// Background track drawn under slider fills.
    pub slider_track: Color,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            screen_circle_segments: 40,
            world_circle_segments: 100,
            conic_steps: 10,
            pie_step: 0.3,
            slider_height: 10.0,
            slider_track: Color::WHITE.with_alpha(0.2),
        }
    }
}

impl DrawSettings {
    pub fn with_screen_circle_segments(mut self, segments: u32) -> Self {
        self.screen_circle_segments = segments;
        self
    }

    pub fn with_world_circle_segments(mut self, segments: u32) -> Self {
        self.world_circle_segments = segments;
        self
    }

    /// Non-positive values fall back to 10.
    pub fn with_conic_steps(mut self, steps: i32) -> Self {
        self.conic_steps = if steps > 0 { steps } else { 10 };
        self
    }

    /// Steps smaller than a thousandth of a radian are clamped up.
    pub fn with_pie_step(mut self, step: f32) -> Self {
        self.pie_step = step.abs().max(MIN_PIE_STEP);
        self
    }

    /// `pie_step` as generators use it: positive and at least a thousandth of a
    /// radian, whatever was written to the field.
    #[inline]
    pub fn effective_pie_step(&self) -> f32 {
        self.pie_step.abs().max(MIN_PIE_STEP)
    }

    pub fn with_slider_height(mut self, height: f32) -> Self {
        self.slider_height = height;
        self
    }

    pub fn with_slider_track(mut self, color: Color) -> Self {
        self.slider_track = color;
        self
    }
}
