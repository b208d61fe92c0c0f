use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::grid::Grid;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        grid: Grid,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<T, GuiError>;
}
