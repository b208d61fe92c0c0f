use crate::core::data::grid::Grid;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;

/// Camera snapshot for exactly one render pass.
///
/// Captured by value at submission time so the worker never sees a viewport
/// that is being replaced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub grid: Grid,
    pub viewport: Viewport,
    pub max_iterations: IterationCap,
}
