#![forbid(unsafe_code)]

//! Static placement rules for the card and the dismiss layer.

use flipmodal_style::LayoutStyle;

use super::variant::ModalCardPosition;

/// Rows between the card and the anchored screen edge for `Top`/`Bottom`.
pub const CARD_INSET: u16 = 2;
/// Stacking order of the card container.
pub const CARD_Z_INDEX: i32 = 100;
/// Stacking order of the dismiss layer, just below the card.
pub const BACKDROP_Z_INDEX: i32 = 99;

static CENTER_STYLE: LayoutStyle = LayoutStyle::fill(CARD_Z_INDEX);

static BOTTOM_STYLE: LayoutStyle = LayoutStyle {
    top: None,
    bottom: Some(CARD_INSET),
    ..LayoutStyle::fill(CARD_Z_INDEX)
};

static TOP_STYLE: LayoutStyle = LayoutStyle {
    top: Some(CARD_INSET),
    bottom: None,
    ..LayoutStyle::fill(CARD_Z_INDEX)
};

/// Full-screen dismiss layer.
pub static BACKDROP_LAYER: LayoutStyle = LayoutStyle::fill(BACKDROP_Z_INDEX);

impl ModalCardPosition {
    /// Layout rules for this position.
    pub fn layout(self) -> &'static LayoutStyle {
        match self {
            Self::Center => &CENTER_STYLE,
            Self::Bottom => &BOTTOM_STYLE,
            Self::Top => &TOP_STYLE,
        }
    }
}
