use std::marker::PhantomData;

use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{ExplorerSession, InteractiveController};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: MandelbrotConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the explorer window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();
        let grid = self.config.grid();

        // The framebuffer maps one-to-one onto the grid, so the window is
        // sized in physical pixels and cannot be resized.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(PhysicalSize::new(grid.width(), grid.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        log::info!(
            "opening {}x{} explorer window ({})",
            grid.width(),
            grid.height(),
            self.config.grid_preset
        );

        let presenter: P = self.presenter_factory.build(window, grid, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let session = ExplorerSession::new(self.config);
        let app = GuiApp::new(window, &event_loop, presenter, controller, session);

        app.run(event_loop)
    }
}
