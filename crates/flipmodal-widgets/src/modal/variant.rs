#![forbid(unsafe_code)]

//! Animation and position variants, parsed by name with fallback.

use std::fmt;

/// Which interpolation mapping drives the card's transform.
///
/// Names are matched exactly (`"default"`, `"vertical"`, `"horizontal"`,
/// `"flipAndScale"`). Any other name selects [`AnimationVariant::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum AnimationVariant {
    /// Fade in while shrinking from 110% to full size.
    #[default]
    Default,
    /// Flip in around the horizontal axis.
    Vertical,
    /// Flip in around the vertical axis.
    Horizontal,
    /// Full turn around the horizontal axis while growing from nothing.
    FlipAndScale,
}

impl AnimationVariant {
    pub const ALL: [Self; 4] = [
        Self::Default,
        Self::Vertical,
        Self::Horizontal,
        Self::FlipAndScale,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "vertical" => Self::Vertical,
            "horizontal" => Self::Horizontal,
            "flipAndScale" => Self::FlipAndScale,
            _ => Self::Default,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::FlipAndScale => "flipAndScale",
        }
    }
}

impl From<&str> for AnimationVariant {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for AnimationVariant {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for AnimationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the card sits on screen.
///
/// Names: `"center"`, `"bottom"`, `"top"`. Any other name selects
/// [`ModalCardPosition::Center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum ModalCardPosition {
    #[default]
    Center,
    Bottom,
    Top,
}

impl ModalCardPosition {
    pub const ALL: [Self; 3] = [Self::Center, Self::Bottom, Self::Top];

    pub fn from_name(name: &str) -> Self {
        match name {
            "bottom" => Self::Bottom,
            "top" => Self::Top,
            _ => Self::Center,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Bottom => "bottom",
            Self::Top => "top",
        }
    }
}

impl From<&str> for ModalCardPosition {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ModalCardPosition {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for ModalCardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
