pub mod colour;
pub mod complex;
pub mod grid;
pub mod iteration_cap;
pub mod point;
pub mod raster_buffer;
pub mod scroll_direction;
pub mod viewport;
