use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Hand-off slot between the render worker and the UI thread. Only the most
/// recent frame is kept.
pub struct PixelsAdapter {
    latest_frame: Mutex<Option<FrameData>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, frame: FrameData) {
        *self
            .latest_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(frame);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            log::trace!("event loop closed, frame not signalled");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            latest_frame: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.latest_frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
