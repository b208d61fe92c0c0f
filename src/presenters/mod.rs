pub mod console;
#[cfg(feature = "gui")]
pub mod pixels;
