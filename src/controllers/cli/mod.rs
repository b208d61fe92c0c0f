pub mod frame_summary;
pub mod headless;
pub mod scroll_gesture;
