#![forbid(unsafe_code)]

//! Packed colors and terminal cells.

use std::str::FromStr;

/// An RGBA color packed into a `u32` as `0xRRGGBBAA`.
///
/// With the `serde` feature, colors deserialize from `"#RRGGBB"` or
/// `"#RRGGBBAA"` strings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same color with alpha scaled by `opacity` (clamped to `[0.0, 1.0]`).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        let a = (self.a() as f32 * opacity).round() as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Source-over compositing of `self` on top of `dst`.
    pub fn over(self, dst: Self) -> Self {
        let sa = self.a() as u32;
        if sa == 255 {
            return self;
        }
        if sa == 0 {
            return dst;
        }
        let da = dst.a() as u32;
        // out_a = sa + da * (1 - sa), all in 0..=255 space.
        let out_a = sa + (da * (255 - sa) + 127) / 255;
        if out_a == 0 {
            return Self::TRANSPARENT;
        }
        let blend = |s: u8, d: u8| -> u8 {
            let s = s as u32 * sa;
            let d = d as u32 * da * (255 - sa) / 255;
            ((s + d + out_a / 2) / out_a).min(255) as u8
        };
        Self::rgba(
            blend(self.r(), dst.r()),
            blend(self.g(), dst.g()),
            blend(self.b(), dst.b()),
            out_a as u8,
        )
    }
}

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl std::fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid color '{}': expected #RRGGBB or #RRGGBBAA", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for PackedRgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for PackedRgba {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Default for PackedRgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl std::fmt::Debug for PackedRgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

/// A single terminal cell: one glyph plus colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub content: char,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: ' ',
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
        }
    }
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        Self {
            content: c,
            ..Self::default()
        }
    }

    pub fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn channels_round_trip_through_packing() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
    }

    #[test]
    fn with_opacity_scales_alpha_only() {
        let c = PackedRgba::rgb(10, 20, 30).with_opacity(0.5);
        assert_eq!((c.r(), c.g(), c.b()), (10, 20, 30));
        assert_eq!(c.a(), 128);
    }

    #[test]
    fn with_opacity_clamps() {
        let c = PackedRgba::rgb(1, 1, 1);
        assert_eq!(c.with_opacity(2.0).a(), 255);
        assert_eq!(c.with_opacity(-1.0).a(), 0);
        assert_eq!(c.with_opacity(f32::NAN).a(), 0);
    }

    #[test]
    fn over_opaque_source_wins() {
        let src = PackedRgba::rgb(200, 0, 0);
        let dst = PackedRgba::rgb(0, 0, 200);
        assert_eq!(src.over(dst), src);
    }

    #[test]
    fn over_transparent_source_keeps_destination() {
        let dst = PackedRgba::rgb(0, 0, 200);
        assert_eq!(PackedRgba::TRANSPARENT.over(dst), dst);
    }

    #[test]
    fn half_black_over_white_is_grey() {
        let out = PackedRgba::rgba(0, 0, 0, 128).over(PackedRgba::WHITE);
        assert_eq!(out.a(), 255);
        assert!((120..=135).contains(&out.r()), "got {out:?}");
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#ff0080".parse(), Ok(PackedRgba::rgb(255, 0, 128)));
        assert_eq!("#00000080".parse(), Ok(PackedRgba::rgba(0, 0, 0, 128)));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["ff0080", "#ff00", "#gg0000", "#ff00800", "#ééé"] {
            assert!(bad.parse::<PackedRgba>().is_err(), "{bad} should fail");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_string() {
        let c: PackedRgba = serde_json::from_str("\"#102030\"").unwrap();
        assert_eq!(c, PackedRgba::rgb(0x10, 0x20, 0x30));
        assert!(serde_json::from_str::<PackedRgba>("\"red\"").is_err());
    }

    proptest! {
        #[test]
        fn over_onto_opaque_is_opaque(
            r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>(),
        ) {
            let out = PackedRgba::rgba(r, g, b, a).over(PackedRgba::rgb(9, 9, 9));
            prop_assert_eq!(out.a(), 255);
        }
    }
}
