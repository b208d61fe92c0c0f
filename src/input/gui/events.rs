/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Sent by the presenter adapter when the render worker has handed over a
    /// frame. The handler still decides whether that frame is shown.
    Wake,
}
