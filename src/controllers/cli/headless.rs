use std::time::Instant;

use crate::controllers::cli::frame_summary::FrameSummary;
use crate::controllers::cli::scroll_gesture::{ScrollGesture, ScrollGestureError};
use crate::controllers::interactive::ExplorerSession;
use crate::controllers::ports::summary_presenter::SummaryPresenterPort;
use crate::core::actions::render_frame::render_frame::render;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Replays scripted scroll gestures against a session, then renders the
/// resulting camera once on the calling thread.
pub struct HeadlessController<P: SummaryPresenterPort> {
    presenter: P,
    session: ExplorerSession,
}

impl<P: SummaryPresenterPort> HeadlessController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig) -> Self {
        Self {
            presenter,
            session: ExplorerSession::new(config),
        }
    }

    /// Applies every gesture in order. All of them are checked against the
    /// grid first, so a rejected script leaves the camera untouched.
    pub fn apply_gestures(&mut self, gestures: &[ScrollGesture]) -> Result<(), ScrollGestureError> {
        let grid = self.session.grid();
        for gesture in gestures {
            gesture.check_on_grid(grid)?;
        }

        for gesture in gestures {
            self.session.scroll(gesture.cursor, gesture.direction);
        }

        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        &self.session
    }

    pub fn run(&self) -> FrameSummary {
        let request = self.session.request();

        log::info!(
            "rendering {}x{} at {} iterations",
            request.grid.width(),
            request.grid.height(),
            request.max_iterations
        );

        let start = Instant::now();
        let raster = render(request.viewport, request.grid, request.max_iterations);
        let summary = FrameSummary::from_raster(request, &raster, start.elapsed());

        self.presenter.present(&summary);
        summary
    }
}
