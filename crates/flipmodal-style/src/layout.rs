#![forbid(unsafe_code)]

//! Absolute layout rules, resolved against an available area.

use flipmodal_core::geometry::{Rect, Size};

/// Main/cross axis alignment of a child inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

/// Absolute placement: insets from the area edges plus child alignment.
///
/// An axis with both insets set stretches between them. An axis with a
/// single inset is anchored to that edge and sized by the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStyle {
    pub z_index: i32,
    pub left: Option<u16>,
    pub right: Option<u16>,
    pub top: Option<u16>,
    pub bottom: Option<u16>,
    /// Vertical alignment of the child (column direction).
    pub justify_content: Align,
    /// Horizontal alignment of the child.
    pub align_items: Align,
}

impl LayoutStyle {
    /// Stretch over the whole area, child centered.
    pub const fn fill(z_index: i32) -> Self {
        Self {
            z_index,
            left: Some(0),
            right: Some(0),
            top: Some(0),
            bottom: Some(0),
            justify_content: Align::Center,
            align_items: Align::Center,
        }
    }

    /// Container rectangle for a child of `child` size within `area`.
    pub fn container(&self, area: Rect, child: Size) -> Rect {
        let (x, width) = resolve_axis(area.x, area.width, self.left, self.right, child.width);
        let (y, height) = resolve_axis(area.y, area.height, self.top, self.bottom, child.height);
        Rect::new(x, y, width, height)
    }

    /// Child rectangle: container from [`Self::container`] with the child
    /// aligned inside it. Always within `area`.
    pub fn place(&self, area: Rect, child: Size) -> Rect {
        let container = self.container(area, child);
        let width = child.width.min(container.width);
        let height = child.height.min(container.height);
        let x = container.x.saturating_add(offset(self.align_items, container.width, width));
        let y = container.y.saturating_add(offset(self.justify_content, container.height, height));
        Rect::new(x, y, width, height)
    }
}

fn offset(align: Align, outer: u16, inner: u16) -> u16 {
    let slack = outer.saturating_sub(inner);
    match align {
        Align::Start => 0,
        Align::Center => slack / 2,
        Align::End => slack,
    }
}

fn resolve_axis(
    origin: u16,
    len: u16,
    lead: Option<u16>,
    trail: Option<u16>,
    child: u16,
) -> (u16, u16) {
    let lead_inset = lead.map(|v| v.min(len));
    let trail_inset = trail.map(|v| v.min(len));
    match (lead_inset, trail_inset) {
        (Some(a), Some(b)) => {
            let start = a.min(len);
            let size = len.saturating_sub(a).saturating_sub(b);
            (origin.saturating_add(start), size)
        }
        (Some(a), None) => {
            let size = child.min(len - a);
            (origin.saturating_add(a), size)
        }
        (None, Some(b)) => {
            let size = child.min(len - b);
            (origin.saturating_add(len - b - size), size)
        }
        (None, None) => {
            let size = child.min(len);
            (origin.saturating_add((len - size) / 2), size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn anchored(top: Option<u16>, bottom: Option<u16>) -> LayoutStyle {
        LayoutStyle {
            top,
            bottom,
            ..LayoutStyle::fill(100)
        }
    }

    #[test]
    fn fill_centers_child() {
        let rect = LayoutStyle::fill(100).place(Rect::new(0, 0, 40, 20), Size::new(10, 4));
        assert_eq!(rect, Rect::new(15, 8, 10, 4));
    }

    #[test]
    fn bottom_anchor_respects_inset() {
        let style = anchored(None, Some(2));
        let rect = style.place(Rect::new(0, 0, 40, 20), Size::new(10, 4));
        assert_eq!(rect, Rect::new(15, 14, 10, 4));
    }

    #[test]
    fn top_anchor_respects_inset() {
        let style = anchored(Some(2), None);
        let rect = style.place(Rect::new(0, 0, 40, 20), Size::new(10, 4));
        assert_eq!(rect, Rect::new(15, 2, 10, 4));
    }

    #[test]
    fn oversized_inset_collapses() {
        let style = anchored(Some(50), None);
        let rect = style.place(Rect::new(0, 0, 40, 20), Size::new(10, 4));
        assert_eq!(rect.height, 0);
    }

    #[test]
    fn area_at_coordinate_limit_saturates() {
        let area = Rect::new(0, u16::MAX - 1, 40, 10);
        let rect = anchored(Some(2), None).place(area, Size::new(10, 4));
        assert_eq!(rect.y, u16::MAX);
        assert_eq!(rect.x, 15);

        let rect = anchored(None, Some(2)).place(area, Size::new(10, 4));
        assert_eq!(rect.y, u16::MAX);
        let rect = LayoutStyle::fill(100).place(Rect::new(u16::MAX, u16::MAX, 40, 10), Size::new(10, 4));
        assert_eq!((rect.x, rect.y), (u16::MAX, u16::MAX));
    }

    proptest! {
        #[test]
        fn placement_never_overflows(
            x in any::<u16>(), y in any::<u16>(), w in any::<u16>(), h in any::<u16>(),
            cw in any::<u16>(), ch in any::<u16>(),
            top in proptest::option::of(any::<u16>()),
            bottom in proptest::option::of(any::<u16>()),
        ) {
            let rect = anchored(top, bottom).place(Rect::new(x, y, w, h), Size::new(cw, ch));
            prop_assert!(rect.width <= w && rect.height <= h);
        }

        #[test]
        fn placement_stays_inside_area(
            x in 0u16..50, y in 0u16..50, w in 0u16..80, h in 0u16..80,
            cw in 0u16..120, ch in 0u16..120,
            top in proptest::option::of(0u16..100),
            bottom in proptest::option::of(0u16..100),
        ) {
            let area = Rect::new(x, y, w, h);
            let rect = anchored(top, bottom).place(area, Size::new(cw, ch));
            prop_assert!(area.contains_rect(&rect));
        }
    }
}
