pub mod channels;
pub mod css;
pub mod error;
pub mod hex;

/// Red in bits 16 to 23, green in 8 to 15, blue in 0 to 7.
pub type PackedColor = i64;

pub const MAX_PACKED: PackedColor = 0xFF_FF_FF;

pub use channels::{Channels, pack_channels, unpack_channels};
pub use css::{CssColor, parse_css_color, to_css_color};
pub use error::ParseError;
pub use hex::channels_to_hex;
