use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every completed, non-superseded frame from the render worker.
///
/// Runs on the worker thread while the controller's request lock is held, so
/// implementations must not submit requests back to the controller.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}
