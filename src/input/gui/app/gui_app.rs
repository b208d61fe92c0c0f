use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    dpi::PhysicalPosition,
    event::{Event, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::{ExplorerSession, InteractiveController};
use crate::core::data::iteration_cap::IterationCap;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

const DESCRIPTION: &str = "Each point c of the complex plane is fed through z = z\u{b2} + c \
    starting from zero. Points whose orbit stays bounded belong to the set and are drawn black; \
    the rest are coloured by how quickly they escape. Scroll over the image to zoom in or out \
    around the cursor.";

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    session: ExplorerSession,
    cursor_position: Option<PhysicalPosition<f64>>,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        session: ExplorerSession,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            controller,
            session,
            cursor_position: None,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), GuiError> {
        let mut failure: Option<GuiError> = None;

        if self.session.needs_initial_render() {
            let request = self.session.request();
            self.submit(request);
        }

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                self.redraw_pending = true;
            }
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                let response = self.egui_state.on_window_event(self.window, event);

                if response.repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(error) = self.redraw() {
                            log::error!("render error: {error}");
                            failure = Some(error);
                            self.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if size.width > 0 && size.height > 0 {
                            if let Err(error) = self.presenter.resize_surface(size.width, size.height) {
                                log::error!("resize error: {error}");
                                failure = Some(error);
                                self.controller.shutdown();
                                elwt.exit();
                            }
                        }
                        self.redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        self.redraw_pending = true;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.cursor_position = Some(*position);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        self.cursor_position = None;
                    }
                    WindowEvent::MouseWheel { delta, .. } if !response.consumed => {
                        self.handle_wheel(*delta);
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), Err)
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        self.redraw_pending = false;

        let egui_output = self.update_ui();

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        let Some(position) = self.cursor_position else {
            return;
        };

        let Some(cursor) = self
            .presenter
            .cursor_to_grid((position.x as f32, position.y as f32))
        else {
            return;
        };

        if let Some(request) = self.session.wheel(cursor, delta_y) {
            self.submit(request);
        }
    }

    fn submit(&mut self, request: RenderRequest) {
        if self.session.should_submit(&request) {
            let generation = self.controller.submit_request(request);
            self.session.record_submission(request, generation);
        }
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let viewport = self.session.viewport();
        let last_render_duration = self.presenter.last_render_duration();
        let current_iterations = self.session.max_iterations().get();
        let mut iterations = current_iterations;
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .title_bar(false)
                .default_pos([10.0, 10.0])
                .default_width(300.0)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading("The Mandelbrot Set");
                    ui.label(DESCRIPTION);
                    ui.separator();

                    ui.label("Maximum iterations (10-500)");
                    ui.add(egui::Slider::new(
                        &mut iterations,
                        IterationCap::MIN..=IterationCap::MAX,
                    ));

                    ui.separator();
                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        viewport.x_min(),
                        viewport.x_max()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        viewport.y_min(),
                        viewport.y_max()
                    ));

                    if ui.button("Reset view").clicked() {
                        reset_clicked = true;
                    }

                    if let Some(render_duration) = last_render_duration {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                });
        });

        if reset_clicked {
            let request = self.session.reset_view();
            self.submit(request);
        } else if iterations != current_iterations {
            let request = self.session.set_max_iterations(i64::from(iterations));
            self.submit(request);
        }

        output
    }
}
