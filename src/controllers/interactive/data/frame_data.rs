use std::time::Duration;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::raster_buffer::RasterBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub request: RenderRequest,
    pub raster: RasterBuffer,
    pub render_duration: Duration,
}
