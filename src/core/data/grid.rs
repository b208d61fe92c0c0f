use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown grid preset {0:?}, expected large (1000x600) or small (800x480)")]
pub struct ParseGridPresetError(String);

/// Fixed output resolution of a render session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * 4
    }
}

/// The two grid sizes the explorer ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridPreset {
    #[default]
    Large,
    Small,
}

impl GridPreset {
    pub const ALL: &'static [Self] = &[Self::Large, Self::Small];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Large => "1000x600",
            Self::Small => "800x480",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Small => "small",
        }
    }

    #[must_use]
    pub const fn grid(self) -> Grid {
        match self {
            Self::Large => Grid {
                width: 1000,
                height: 600,
            },
            Self::Small => Grid {
                width: 800,
                height: 480,
            },
        }
    }
}

impl std::fmt::Display for GridPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl std::str::FromStr for GridPreset {
    type Err = ParseGridPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|preset| name == preset.cli_name() || name == preset.display_name())
            .ok_or_else(|| ParseGridPresetError(s.to_string()))
    }
}
