use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::grid::Grid;
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Shows rendered frames through a `pixels` framebuffer the size of the grid,
/// with egui drawn over it.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    grid: Grid,
    surface_width: u32,
    surface_height: u32,
    presented_generation: u64,
    last_render_duration: Option<Duration>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        grid: Grid,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(grid.width(), grid.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            grid,
            surface_width: size.width,
            surface_height: size.height,
            presented_generation: 0,
            last_render_duration: None,
        })
    }

    /// Takes the pending frame, if any, and copies it in when it is newer
    /// than what is already on screen.
    fn accept_pending_frame(&mut self) {
        let Some(frame) = self.adapter.take_frame() else {
            return;
        };

        if frame.generation <= self.presented_generation {
            log::trace!(
                "ignoring generation {} (showing {})",
                frame.generation,
                self.presented_generation
            );
            return;
        }

        if frame.raster.grid() != self.grid {
            log::warn!(
                "frame {} is {}x{} but the framebuffer is {}x{}",
                frame.generation,
                frame.raster.grid().width(),
                frame.raster.grid().height(),
                self.grid.width(),
                self.grid.height()
            );
            return;
        }

        self.copy_frame(&frame);
        self.presented_generation = frame.generation;
        self.last_render_duration = Some(frame.render_duration);
    }

    fn copy_frame(&mut self, frame: &FrameData) {
        self.pixels.frame_mut().copy_from_slice(frame.raster.data());
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError> {
        self.accept_pending_frame();

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;
        Ok(())
    }

    fn cursor_to_grid(&self, physical_position: (f32, f32)) -> Option<Point> {
        self.pixels
            .window_pos_to_pixel(physical_position)
            .ok()
            .map(|(x, y)| Point::new(x as f64, y as f64))
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}
