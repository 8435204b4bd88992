use crate::channels::pack_channels;

pub const MIN_HEX_DIGITS: usize = 6;

/// Packs the channels and renders them as uppercase base 16, zero-padded to at
/// least [`MIN_HEX_DIGITS`] digits.
///
/// Wider values are never truncated. A negative packed value is rendered as its
/// 64-bit two's complement, so the result never carries a sign.
#[must_use]
pub fn channels_to_hex(r: i64, g: i64, b: i64) -> String {
    format!(
        "{:0width$X}",
        pack_channels(r, g, b),
        width = MIN_HEX_DIGITS
    )
}
