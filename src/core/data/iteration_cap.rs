use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IterationCapError {
    #[error("maximum iterations must be between {min} and {max}, got {value}")]
    OutOfRange { value: u32, min: u32, max: u32 },
}

/// Upper bound on escape-time iterations, kept within `MIN..=MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IterationCap(u32);

impl IterationCap {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 500;
    pub const DEFAULT: Self = Self(100);

    pub fn new(value: u32) -> Result<Self, IterationCapError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(IterationCapError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }

        Ok(Self(value))
    }

    /// Pulls any slider or CLI value into range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for IterationCap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for IterationCap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
