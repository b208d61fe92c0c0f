mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::render_frame::{render, render_cancelable, render_serial};
pub use crate::core::actions::zoom_viewport::zoom_at;
pub use crate::core::data::colour::Rgba;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::{Grid, GridError, GridPreset, ParseGridPresetError};
pub use crate::core::data::iteration_cap::{IterationCap, IterationCapError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_buffer::{RasterBuffer, RasterBufferError};
pub use crate::core::data::scroll_direction::ScrollDirection;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_map::banded_colour;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub use controllers::cli::frame_summary::FrameSummary;
pub use controllers::cli::headless::HeadlessController;
pub use controllers::cli::scroll_gesture::{ScrollGesture, ScrollGestureError};
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::data::render_request::RenderRequest;
pub use controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use controllers::interactive::{ExplorerSession, InteractiveController};
pub use controllers::ports::summary_presenter::SummaryPresenterPort;
pub use presenters::console::summary::LogSummaryPresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
