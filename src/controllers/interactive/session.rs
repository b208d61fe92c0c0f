use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::zoom_viewport::zoom_at;
use crate::core::data::grid::Grid;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::point::Point;
use crate::core::data::scroll_direction::ScrollDirection;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Current camera of one explorer window plus submission bookkeeping.
///
/// Every stimulus replaces the camera and returns the snapshot that must be
/// rendered next; nothing is debounced.
#[derive(Debug, Clone)]
pub struct ExplorerSession {
    config: MandelbrotConfig,
    viewport: Viewport,
    max_iterations: IterationCap,
    last_submitted_request: Option<RenderRequest>,
    latest_submitted_generation: u64,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self {
            config,
            viewport: config.viewport,
            max_iterations: config.max_iterations,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.config.grid()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> IterationCap {
        self.max_iterations
    }

    #[must_use]
    pub fn request(&self) -> RenderRequest {
        RenderRequest {
            grid: self.grid(),
            viewport: self.viewport,
            max_iterations: self.max_iterations,
        }
    }

    pub fn scroll(&mut self, cursor: Point, direction: ScrollDirection) -> RenderRequest {
        self.viewport = zoom_at(self.viewport, cursor, self.grid(), direction);
        log::debug!(
            "{direction:?} scroll at ({:.1}, {:.1}) -> x [{}, {}], y [{}, {}]",
            cursor.x,
            cursor.y,
            self.viewport.x_min(),
            self.viewport.x_max(),
            self.viewport.y_min(),
            self.viewport.y_max()
        );
        self.request()
    }

    /// Converts a raw vertical wheel delta into a scroll. A zero delta is not
    /// a gesture and produces no request.
    pub fn wheel(&mut self, cursor: Point, delta_y: f64) -> Option<RenderRequest> {
        ScrollDirection::from_wheel_delta(delta_y).map(|direction| self.scroll(cursor, direction))
    }

    pub fn set_max_iterations(&mut self, requested: i64) -> RenderRequest {
        self.max_iterations = IterationCap::clamped(requested);
        self.request()
    }

    pub fn reset_view(&mut self) -> RenderRequest {
        self.viewport = self.config.viewport;
        self.max_iterations = self.config.max_iterations;
        self.request()
    }

    /// True until a frame has been asked for, so the host renders once on
    /// startup without waiting for a stimulus.
    #[must_use]
    pub fn needs_initial_render(&self) -> bool {
        self.last_submitted_request.is_none()
    }

    /// Identical snapshots are not rendered twice in a row.
    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request.as_ref() != Some(request)
    }

    pub fn record_submission(&mut self, request: RenderRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    #[must_use]
    pub fn latest_submitted_generation(&self) -> u64 {
        self.latest_submitted_generation
    }
}

impl Default for ExplorerSession {
    fn default() -> Self {
        Self::new(MandelbrotConfig::default())
    }
}
