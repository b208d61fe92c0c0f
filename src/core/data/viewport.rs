use crate::core::data::complex::Complex;
use crate::core::data::grid::Grid;
use crate::core::data::point::Point;
use crate::core::data::scroll_direction::ScrollDirection;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error(
        "viewport bounds must be finite with min < max: x [{x_min}, {x_max}], y [{y_min}, {y_max}]"
    )]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// The rectangle of the complex plane mapped onto the pixel grid.
///
/// `x` runs along the real axis and `y` along the imaginary axis. Pixel row 0
/// maps to `y_min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    /// Whole set visible.
    pub const DEFAULT: Self = Self {
        x_min: -2.5,
        x_max: 1.0,
        y_min: -1.0,
        y_max: 1.0,
    };

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        // Also rejects spans that overflow to infinity.
        if !finite || !(x_max - x_min).is_finite() || !(y_max - y_min).is_finite() {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        if x_min >= x_max || y_min >= y_max {
            return Err(ViewportError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn span_x(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn span_y(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Linear interpolation from pixel space into the plane. Pixel `W` (one
    /// past the last column) would land on `x_max`.
    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point, grid: Grid) -> Complex {
        Complex {
            real: self.x_min + (pixel.x / f64::from(grid.width())) * self.span_x(),
            imag: self.y_min + (pixel.y / f64::from(grid.height())) * self.span_y(),
        }
    }

    /// Scales both spans by the direction's zoom factor while keeping the
    /// plane point under `cursor` fixed in pixel space.
    ///
    /// If the result would not be a valid viewport (spans collapsed to zero or
    /// overflowed) the current viewport is returned unchanged.
    #[must_use]
    pub fn zoom_at(&self, cursor: Point, grid: Grid, direction: ScrollDirection) -> Self {
        let anchor = self.pixel_to_plane(cursor, grid);
        let fraction_x = cursor.x / f64::from(grid.width());
        let fraction_y = cursor.y / f64::from(grid.height());

        let factor = direction.zoom_factor();
        let span_x = self.span_x() * factor;
        let span_y = self.span_y() * factor;

        let zoomed = Self::new(
            anchor.real - fraction_x * span_x,
            anchor.real + (1.0 - fraction_x) * span_x,
            anchor.imag - fraction_y * span_y,
            anchor.imag + (1.0 - fraction_y) * span_y,
        );

        match zoomed {
            Ok(viewport) => viewport,
            Err(err) => {
                log::warn!("ignoring {direction:?} zoom at ({}, {}): {err}", cursor.x, cursor.y);
                *self
            }
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}
