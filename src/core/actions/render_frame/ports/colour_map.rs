use crate::core::data::colour::Rgba;

pub trait ColourMap {
    fn map(&self, iterations: u32) -> Rgba;
}
