use crate::core::data::complex::Complex;

/// Decides how quickly a point of the complex plane diverges.
pub trait FractalAlgorithm {
    /// Iteration count in `0..=max_iterations()`. Reaching the maximum means
    /// the point never escaped.
    fn iterations(&self, point: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
