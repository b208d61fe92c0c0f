use crate::controllers::cli::frame_summary::FrameSummary;

pub trait SummaryPresenterPort {
    fn present(&self, summary: &FrameSummary);
}
