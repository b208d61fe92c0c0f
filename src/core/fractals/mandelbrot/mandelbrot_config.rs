use crate::core::data::grid::{Grid, GridPreset};
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;

/// Starting camera and output size for an explorer session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MandelbrotConfig {
    pub grid_preset: GridPreset,
    pub viewport: Viewport,
    pub max_iterations: IterationCap,
}

impl MandelbrotConfig {
    #[must_use]
    pub fn with_grid_preset(mut self, grid_preset: GridPreset) -> Self {
        self.grid_preset = grid_preset;
        self
    }

    /// Accepts any requested cap and clamps it into range.
    #[must_use]
    pub fn with_max_iterations(mut self, requested: i64) -> Self {
        self.max_iterations = IterationCap::clamped(requested);
        self
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid_preset.grid()
    }
}
