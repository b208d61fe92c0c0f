//! Interactive controller for real-time fractal exploration.
//!
//! # Architecture
//!
//! The interactive layer follows the ports & adapters pattern:
//! - **State**: `ExplorerSession` turns scroll and slider stimuli into
//!   `RenderRequest` snapshots
//! - **Worker**: `InteractiveController` renders the newest snapshot on a
//!   background thread, cancelling superseded passes
//! - **Output**: `InteractiveControllerPresenterPort` receives finished frames

mod controller;
pub mod data;
pub mod ports;
mod session;

pub use controller::InteractiveController;
pub use session::ExplorerSession;
