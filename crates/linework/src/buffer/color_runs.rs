use crate::paint::Color;

/// "From vertex `start` onward, until superseded, use `color`."
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorRun {
    pub start: usize,
    pub color: Color,
}

impl ColorRun {
    #[inline]
    pub const fn new(start: usize, color: Color) -> Self {
        Self { start, color }
    }
}

/// Sparse per-vertex color overrides, ordered by `start`.
///
/// Runs are only ever appended at the owning buffer's current length, so `start`
/// is non-decreasing. Two runs landing on the same index coalesce into one.
#[derive(Debug, Clone, Default)]
pub struct ColorRunTrack {
    runs: Vec<ColorRun>,
}

impl ColorRunTrack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `color` starting at vertex `start`.
    ///
    /// If the last run already starts at `start` it is overwritten in place.
    pub fn push(&mut self, start: usize, color: Color) {
        let run = ColorRun::new(start, color);

        if let Some(last) = self.runs.last_mut() {
            debug_assert!(last.start <= start, "color runs must be appended in vertex order");
            if last.start == start {
                *last = run;
                return;
            }
        }

        self.runs.push(run);
    }

    /// Drops all runs. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    #[inline]
    pub fn runs(&self) -> &[ColorRun] {
        &self.runs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Resolves one color per vertex for `count` vertices.
    #[inline]
    pub fn resolve(&self, count: usize) -> ResolvedColors<'_> {
        ResolvedColors {
            runs: &self.runs,
            cursor: 0,
            current: Color::WHITE,
            index: 0,
            count,
        }
    }
}

/// Iterator over the effective color of each vertex.
///
/// Walks vertices in order with a run cursor: when the cursor's run starts at the
/// current vertex its color is adopted and the cursor advances, wrapping back to
/// the first run once it passes the last one.
#[derive(Debug, Clone)]
pub struct ResolvedColors<'a> {
    runs: &'a [ColorRun],
    cursor: usize,
    current: Color,
    index: usize,
    count: usize,
}

impl Iterator for ResolvedColors<'_> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.index >= self.count {
            return None;
        }

        if let Some(run) = self.runs.get(self.cursor) {
            if run.start == self.index {
                self.current = run.color;
                self.cursor += 1;
                if self.cursor >= self.runs.len() {
                    self.cursor = 0;
                }
            }
        }

        self.index += 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ResolvedColors<'_> {}
