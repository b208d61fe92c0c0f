use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Rgba;
use crate::core::data::iteration_cap::IterationCap;

/// Cyclic false-colouring: bands wrap around as the iteration count grows
/// rather than forming a gradient.
///
/// Points that never escaped take the `band = 0` case of the same formula,
/// which comes out black.
#[must_use]
pub fn banded_colour(iterations: u32, max_iterations: u32) -> Rgba {
    let iterations = u64::from(iterations);
    let band = if iterations == u64::from(max_iterations) {
        0
    } else {
        (iterations * 5) % 256
    };

    let shade = (band * iterations) % 255;
    let blue = (2 * band * iterations) % 255;

    Rgba::opaque(shade as u8, shade as u8, blue as u8)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BandedColourMap {
    max_iterations: IterationCap,
}

impl BandedColourMap {
    #[must_use]
    pub fn new(max_iterations: IterationCap) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for BandedColourMap {
    fn map(&self, iterations: u32) -> Rgba {
        banded_colour(iterations, self.max_iterations.get())
    }
}
