use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_cap::IterationCap;

// |z|² above this means the orbit has left the radius-2 disc and diverges.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z ← z² + c` from `z = 0` until `|z|² > 4` or
/// `max_iterations` is reached.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: IterationCap,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: IterationCap) -> Self {
        Self { max_iterations }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn iterations(&self, point: Complex) -> u32 {
        escape_time(point, self.max_iterations.get())
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations.get()
    }
}
