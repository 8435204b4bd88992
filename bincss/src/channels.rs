use palette::Srgb;

use crate::PackedColor;

/// A red, green and blue channel triple.
///
/// Each channel is nominally in `0..=255`, but `r` is whatever lies above bit 15
/// of the packed value it came from, so it may be larger or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channels {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Channels {
    #[must_use]
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn pack(self) -> PackedColor {
        pack_channels(self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Channels {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(i64::from(r), i64::from(g), i64::from(b))
    }
}

impl From<Srgb<u8>> for Channels {
    fn from(colour: Srgb<u8>) -> Self {
        Self::from([colour.red, colour.green, colour.blue])
    }
}

/// Splits a packed value into its channels.
///
/// Only `g` and `b` are masked to 8 bits. Anything above bit 23 stays in `r`,
/// and negative values shift arithmetically.
#[must_use]
pub const fn unpack_channels(value: PackedColor) -> Channels {
    Channels {
        r: value >> 16,
        g: (value >> 8) & 0xFF,
        b: value & 0xFF,
    }
}

#[must_use]
pub const fn pack_channels(r: i64, g: i64, b: i64) -> PackedColor {
    (r << 16) | (g << 8) | b
}
