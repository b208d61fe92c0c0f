use thiserror::Error;

/// How many pixels a row may process between cancellation checks.
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render cancelled")]
pub struct Cancelled;

/// Polled by long-running passes so a superseded render can stop early.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
