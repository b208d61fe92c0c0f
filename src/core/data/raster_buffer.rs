use crate::core::data::colour::Rgba;
use crate::core::data::grid::Grid;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn grid_to_buffer_size(grid: Grid) -> usize {
    grid.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterBufferError {
    #[error("grid size {grid_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

pub type RasterData = Vec<u8>;

/// Row-major RGBA pixels for one complete frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    grid: Grid,
    data: RasterData,
}

impl RasterBuffer {
    /// A black, fully transparent buffer sized for `grid`.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            data: vec![0; grid_to_buffer_size(grid)],
        }
    }

    pub fn from_data(grid: Grid, data: RasterData) -> Result<Self, RasterBufferError> {
        let grid_size = grid_to_buffer_size(grid);

        if grid_size != data.len() {
            return Err(RasterBufferError::BoundsMismatch {
                grid_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self { grid, data })
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn into_data(self) -> RasterData {
        self.data
    }

    /// Colour at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.grid.width() || y >= self.grid.height() {
            return None;
        }

        let offset = (y as usize * self.grid.width() as usize + x as usize) * BYTES_PER_PIXEL;
        let bytes = &self.data[offset..offset + BYTES_PER_PIXEL];

        Some(Rgba {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data.chunks_exact(BYTES_PER_PIXEL).map(|bytes| Rgba {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_grid(width: u32, height: u32) -> Grid {
        Grid::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = RasterBuffer::new(create_grid(10, 5));

        assert_eq!(buffer.data().len(), 200); // 10 * 5 * 4
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let grid = create_grid(2, 1);
        let data: RasterData = vec![
            255, 0, 0, 255, // (0,0) red
            0, 0, 255, 255, // (1,0) blue
        ];

        let buffer = RasterBuffer::from_data(grid, data.clone()).unwrap();

        assert_eq!(buffer.grid(), grid);
        assert_eq!(buffer.data(), data.as_slice());
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let grid = create_grid(2, 2);

        assert_eq!(
            RasterBuffer::from_data(grid, vec![0; 12]),
            Err(RasterBufferError::BoundsMismatch {
                grid_size: 16,
                buffer_size: 12
            })
        );
        assert_eq!(
            RasterBuffer::from_data(grid, vec![]),
            Err(RasterBufferError::BoundsMismatch {
                grid_size: 16,
                buffer_size: 0
            })
        );
    }

    #[test]
    fn test_pixel_reads_row_major_offsets() {
        let grid = create_grid(2, 2);
        let data: RasterData = (0..16).collect();
        let buffer = RasterBuffer::from_data(grid, data).unwrap();

        assert_eq!(
            buffer.pixel(1, 0),
            Some(Rgba {
                r: 4,
                g: 5,
                b: 6,
                a: 7
            })
        );
        assert_eq!(
            buffer.pixel(0, 1),
            Some(Rgba {
                r: 8,
                g: 9,
                b: 10,
                a: 11
            })
        );
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 2), None);
    }

    #[test]
    fn test_pixels_iterates_every_pixel() {
        let grid = create_grid(3, 2);
        let buffer = RasterBuffer::from_data(grid, vec![7; 24]).unwrap();

        assert_eq!(buffer.pixels().count(), 6);
        assert!(buffer.pixels().all(|p| p == Rgba { r: 7, g: 7, b: 7, a: 7 }));
    }
}
