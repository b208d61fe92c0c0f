use std::time::Duration;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::point::Point;
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::fractals::mandelbrot::algorithm::escape_time;

/// What the headless binary reports about a finished frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary {
    pub request: RenderRequest,
    pub render_duration: Duration,
    pub total_pixels: usize,
    /// Pixels whose orbit reached the iteration cap without escaping.
    pub in_set_pixels: usize,
}

impl FrameSummary {
    /// Counts in-set pixels of a frame rendered for `request`.
    ///
    /// In-set pixels are always black, but so are escaped counts whose band
    /// wraps to zero, so black pixels are re-evaluated to tell them apart.
    #[must_use]
    pub fn from_raster(request: RenderRequest, raster: &RasterBuffer, render_duration: Duration) -> Self {
        let grid = raster.grid();
        let cap = request.max_iterations.get();
        let width = grid.width() as usize;

        let in_set_pixels = raster
            .pixels()
            .enumerate()
            .filter(|(_, p)| p.r == 0 && p.g == 0 && p.b == 0)
            .filter(|(i, _)| {
                let pixel = Point::new((i % width) as f64, (i / width) as f64);
                escape_time(request.viewport.pixel_to_plane(pixel, grid), cap) == cap
            })
            .count();

        Self {
            request,
            render_duration,
            total_pixels: grid.pixel_count(),
            in_set_pixels,
        }
    }

    #[must_use]
    pub fn in_set_fraction(&self) -> f64 {
        self.in_set_pixels as f64 / self.total_pixels as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::render_frame::render;
    use crate::core::data::grid::{Grid, GridPreset};
    use crate::core::data::iteration_cap::IterationCap;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::colour_map::banded_colour;

    fn request_for(grid: Grid, viewport: Viewport, cap: u32) -> RenderRequest {
        RenderRequest {
            grid,
            viewport,
            max_iterations: IterationCap::new(cap).unwrap(),
        }
    }

    #[test]
    fn black_escaped_pixel_is_not_counted_in_set() {
        // 51 escapes with band 255, and 255 * 51 wraps every channel to zero
        assert_eq!(banded_colour(51, 100), banded_colour(100, 100));

        // 2x1 grid over [-2.5, 1.5]: pixel 0 is c = -2.5 (escapes at 1),
        // pixel 1 is c = -0.5 (in the set)
        let grid = Grid::new(2, 1).unwrap();
        let viewport = Viewport::new(-2.5, 1.5, 0.0, 1e-9).unwrap();
        let raster = RasterBuffer::from_data(
            grid,
            vec![
                0, 0, 0, 255, //
                0, 0, 0, 255,
            ],
        )
        .unwrap();

        let summary = FrameSummary::from_raster(request_for(grid, viewport, 100), &raster, Duration::from_millis(3));

        assert_eq!(summary.total_pixels, 2);
        assert_eq!(summary.in_set_pixels, 1);
        assert_eq!(summary.in_set_fraction(), 0.5);
    }

    #[test]
    fn in_set_count_matches_escape_time_recount() {
        let grid = GridPreset::Small.grid();
        let request = request_for(grid, Viewport::DEFAULT, 100);
        let raster = render(request.viewport, grid, request.max_iterations);

        let mut expected = 0;
        let mut black = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let c = request
                    .viewport
                    .pixel_to_plane(Point::new(f64::from(x), f64::from(y)), grid);
                if escape_time(c, 100) == 100 {
                    expected += 1;
                }
                if raster.pixel(x, y).is_some_and(|p| p.r == 0 && p.g == 0 && p.b == 0) {
                    black += 1;
                }
            }
        }

        let summary = FrameSummary::from_raster(request, &raster, Duration::ZERO);

        assert_eq!(summary.in_set_pixels, expected);
        // the default view has escaped pixels whose band wraps to black
        assert!(black > expected);
    }
}
