//! Input adapters for the explorer.
//!
//! Adapters here receive pointer and widget input from a host and translate
//! it into session stimuli.

pub mod gui;
