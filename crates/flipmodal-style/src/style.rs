#![forbid(unsafe_code)]

//! Foreground/background style with cascading merge.

use flipmodal_render::cell::{Cell, PackedRgba};

/// Cell colors to apply over an area. Unset fields leave cells untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
}

impl Style {
    pub const fn new() -> Self {
        Self { fg: None, bg: None }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }

    /// Merge `other` on top of `self`: fields set in `other` win.
    #[must_use]
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
        }
    }

    /// Apply to a single cell, preserving its glyph.
    pub fn apply_to(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
    }
}
