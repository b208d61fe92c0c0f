#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const OPAQUE: u8 = 255;

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Self::OPAQUE,
        }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
