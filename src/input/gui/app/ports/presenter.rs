use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    /// Draws the newest accepted frame with the egui overlay on top.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    /// Maps a physical window position onto the render grid. `None` when the
    /// position falls outside the framebuffer.
    fn cursor_to_grid(&self, physical_position: (f32, f32)) -> Option<Point>;
    fn last_render_duration(&self) -> Option<Duration>;
}
