pub mod cancellation;
pub mod render_frame;
pub mod zoom_viewport;
