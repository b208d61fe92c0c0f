pub const ZOOM_IN_FACTOR: f64 = 0.9;
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

/// Which way a wheel gesture went.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Wheel pushed away from the user. Zooms in.
    Forward,
    /// Wheel pulled towards the user. Zooms out.
    Backward,
}

impl ScrollDirection {
    /// Interprets a vertical wheel delta where positive means "away from the
    /// user". A zero delta is not a gesture.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Forward)
        } else if delta_y < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn zoom_factor(self) -> f64 {
        match self {
            Self::Forward => ZOOM_IN_FACTOR,
            Self::Backward => ZOOM_OUT_FACTOR,
        }
    }
}
