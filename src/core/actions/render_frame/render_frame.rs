use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid::Grid;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::point::Point;
use crate::core::data::raster_buffer::{BYTES_PER_PIXEL, RasterBuffer};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::BandedColourMap;

/// Renders one complete Mandelbrot frame.
///
/// Rows are computed in parallel on rayon's pool; the output is byte-identical
/// to [`render_serial`]. For a pass that can be abandoned part way, use
/// [`render_cancelable`].
#[must_use]
pub fn render(viewport: Viewport, grid: Grid, max_iterations: IterationCap) -> RasterBuffer {
    match render_cancelable(viewport, grid, max_iterations, &NeverCancel) {
        Ok(raster) => raster,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`render`], but checks `cancel` at the start of every row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// A cancelled pass returns no buffer at all, so a partially rendered frame
/// can never reach a presenter.
pub fn render_cancelable<C: CancelToken>(
    viewport: Viewport,
    grid: Grid,
    max_iterations: IterationCap,
    cancel: &C,
) -> Result<RasterBuffer, Cancelled> {
    render_with(
        viewport,
        grid,
        &MandelbrotAlgorithm::new(max_iterations),
        &BandedColourMap::new(max_iterations),
        cancel,
    )
}

/// Single-threaded reference pass, row by row.
#[must_use]
pub fn render_serial(viewport: Viewport, grid: Grid, max_iterations: IterationCap) -> RasterBuffer {
    let algorithm = MandelbrotAlgorithm::new(max_iterations);
    let colour_map = BandedColourMap::new(max_iterations);
    let mut raster = RasterBuffer::new(grid);

    for (y, row) in raster.data_mut().chunks_exact_mut(grid.row_stride()).enumerate() {
        match render_row(row, y as u32, viewport, grid, &algorithm, &colour_map, &NeverCancel) {
            Ok(()) => {}
            Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
        }
    }

    raster
}

pub(crate) fn render_with<Alg, CMap, C>(
    viewport: Viewport,
    grid: Grid,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<RasterBuffer, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
    C: CancelToken,
{
    let mut raster = RasterBuffer::new(grid);

    raster
        .data_mut()
        .par_chunks_mut(grid.row_stride())
        .enumerate()
        .try_for_each(|(y, row)| {
            render_row(row, y as u32, viewport, grid, algorithm, colour_map, cancel)
        })?;

    Ok(raster)
}

fn render_row<Alg, CMap, C>(
    row: &mut [u8],
    y: u32,
    viewport: Viewport,
    grid: Grid,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
    C: CancelToken,
{
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        let point = viewport.pixel_to_plane(Point::new(x as f64, f64::from(y)), grid);
        let colour = colour_map.map(algorithm.iterations(point));
        pixel.copy_from_slice(&colour.to_bytes());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Rgba;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::mandelbrot::algorithm::escape_time;
    use crate::core::fractals::mandelbrot::colour_map::banded_colour;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Encodes the plane point as `real + 10 * imag`.
    #[derive(Debug)]
    struct StubCoordinateAlgorithm {}

    impl FractalAlgorithm for StubCoordinateAlgorithm {
        fn iterations(&self, point: Complex) -> u32 {
            point.real as u32 + 10 * point.imag as u32
        }

        fn max_iterations(&self) -> u32 {
            u32::MAX
        }
    }

    #[derive(Debug)]
    struct StubGreyColourMap {}

    impl ColourMap for StubGreyColourMap {
        fn map(&self, iterations: u32) -> Rgba {
            let value = iterations as u8;
            Rgba {
                r: value,
                g: value,
                b: value,
                a: 1,
            }
        }
    }

    fn cap(value: u32) -> IterationCap {
        IterationCap::new(value).unwrap()
    }

    #[test]
    fn test_writes_each_pixel_at_row_major_offset() {
        let grid = Grid::new(4, 2).unwrap();
        let viewport = Viewport::new(0.0, 4.0, 0.0, 2.0).unwrap();

        let raster = render_with(
            viewport,
            grid,
            &StubCoordinateAlgorithm {},
            &StubGreyColourMap {},
            &NeverCancel,
        )
        .unwrap();

        let expected: Vec<u8> = [0, 1, 2, 3, 10, 11, 12, 13]
            .iter()
            .flat_map(|&v| [v, v, v, 1])
            .collect();
        assert_eq!(raster.data(), expected.as_slice());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let grid = Grid::new(64, 40).unwrap();
        let viewport = Viewport::new(-0.8, -0.7, 0.05, 0.15).unwrap();

        assert_eq!(
            render(viewport, grid, cap(200)),
            render_serial(viewport, grid, cap(200))
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let grid = Grid::new(80, 48).unwrap();

        let first = render(Viewport::default(), grid, cap(100));
        let second = render(Viewport::default(), grid, cap(100));

        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_every_pixel_matches_evaluator_and_colour_mapper() {
        let grid = Grid::new(30, 20).unwrap();
        let viewport = Viewport::default();
        let raster = render(viewport, grid, cap(50));

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let point = viewport.pixel_to_plane(Point::new(f64::from(x), f64::from(y)), grid);
                let expected = banded_colour(escape_time(point, 50), 50);

                assert_eq!(raster.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_every_pixel_is_opaque() {
        let raster = render(Viewport::default(), Grid::new(50, 30).unwrap(), cap(10));

        assert!(raster.pixels().all(|p| p.a == 255));
    }

    #[test]
    fn test_single_pixel_grid() {
        let grid = Grid::new(1, 1).unwrap();
        let raster = render(Viewport::default(), grid, cap(10));

        // Only pixel maps to (-2.5, -1.0), which escapes after one step.
        assert_eq!(raster.pixel(0, 0), Some(Rgba::opaque(5, 5, 10)));
    }

    #[test]
    fn test_changing_cap_rerenders_whole_frame() {
        let grid = Grid::new(40, 24).unwrap();
        let low = render(Viewport::default(), grid, cap(10));
        let high = render(Viewport::default(), grid, cap(500));

        assert_eq!(low.data().len(), high.data().len());
        assert_ne!(low.data(), high.data());
    }

    #[test]
    fn test_cancelled_render_returns_no_buffer() {
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = render_cancelable(Viewport::default(), Grid::new(16, 16).unwrap(), cap(10), &token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancellation_mid_pass_stops_early() {
        let checks = AtomicUsize::new(0);
        let token = || checks.fetch_add(1, Ordering::Relaxed) >= 3;

        let result = render_cancelable(Viewport::default(), Grid::new(32, 64).unwrap(), cap(10), &token);

        assert_eq!(result, Err(Cancelled));
    }
}
