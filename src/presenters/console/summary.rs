use crate::controllers::cli::frame_summary::FrameSummary;
use crate::controllers::ports::summary_presenter::SummaryPresenterPort;

/// Reports frame summaries through the `log` facade.
#[derive(Debug, Default)]
pub struct LogSummaryPresenter {}

impl LogSummaryPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl SummaryPresenterPort for LogSummaryPresenter {
    fn present(&self, summary: &FrameSummary) {
        let request = &summary.request;
        let viewport = request.viewport;

        log::info!(
            "viewport: real [{}, {}], imag [{}, {}]",
            viewport.x_min(),
            viewport.x_max(),
            viewport.y_min(),
            viewport.y_max()
        );
        log::info!(
            "rendered {}x{} at {} iterations in {:?}",
            request.grid.width(),
            request.grid.height(),
            request.max_iterations,
            summary.render_duration
        );
        log::info!(
            "in-set pixels: {} of {} ({:.1}%)",
            summary.in_set_pixels,
            summary.total_pixels,
            summary.in_set_fraction() * 100.0
        );
    }
}
