use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    MAX_PACKED, PackedColor,
    channels::{Channels, unpack_channels},
    error::{ParseError, ParseResult},
    hex::{MIN_HEX_DIGITS, channels_to_hex},
};

/// A CSS hex colour literal, `#RRGGBB` for any packed value in `0..=0xFFFFFF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssColor(Box<str>);

impl CssColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recovers the packed value, or `None` if this literal was produced from a
    /// value outside 24 bits.
    #[must_use]
    pub fn packed(&self) -> Option<PackedColor> {
        parse_css_color(&self.0).ok()
    }
}

impl AsRef<str> for CssColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for CssColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Channels> for CssColor {
    fn from(channels: Channels) -> Self {
        to_css_color(channels.pack())
    }
}

impl FromStr for CssColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_color(s)
            .inspect_err(|error| tracing::trace!(input = s, %error, "rejected css colour"))
            .map(to_css_color)
    }
}

impl Serialize for CssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CssColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

/// Formats a packed value as a CSS hex colour.
///
/// Total over `i64`. Values outside `0..=0xFFFFFF` are not rejected: the high
/// bits land in the red channel and the literal grows past six digits.
#[must_use]
pub fn to_css_color(value: PackedColor) -> CssColor {
    if !(0..=MAX_PACKED).contains(&value) {
        tracing::trace!(value, "packed colour lies outside 24 bits");
    }

    let Channels { r, g, b } = unpack_channels(value);
    CssColor(format!("#{}", channels_to_hex(r, g, b)).into())
}

/// Parses `#RRGGBB`, in either case, back into a packed value.
///
/// # Errors
/// - [`ParseError::MissingHash`] if `s` does not start with `#`.
/// - [`ParseError::InvalidDigit`] if anything after the `#` is not a hex digit.
/// - [`ParseError::InvalidLength`] if there are not exactly six digits.
pub fn parse_css_color(s: &str) -> ParseResult<PackedColor> {
    let digits = s.strip_prefix('#').ok_or(ParseError::MissingHash)?;

    let packed = digits.chars().try_fold(0, |packed: PackedColor, c| {
        c.to_digit(16)
            .map(|d| (packed << 4) | PackedColor::from(d))
            .ok_or(ParseError::InvalidDigit(c))
    })?;

    // every char is an ascii hex digit here, so bytes and chars agree
    if digits.len() != MIN_HEX_DIGITS {
        return Err(ParseError::InvalidLength(digits.len()));
    }
    Ok(packed)
}
