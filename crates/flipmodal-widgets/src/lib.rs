#![forbid(unsafe_code)]

//! Widgets for flipmodal: the animated modal overlay and a bordered panel
//! to put inside it.

pub mod modal;
pub mod panel;

pub use panel::Panel;

use flipmodal_core::geometry::Rect;
use flipmodal_render::buffer::Buffer;
use flipmodal_render::cell::{Cell, PackedRgba};
use flipmodal_render::frame::Frame;
use flipmodal_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

impl<W: Widget + ?Sized> Widget for &W {
    fn render(&self, area: Rect, frame: &mut Frame) {
        (**self).render(area, frame);
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                style.apply_to(cell);
            }
        }
    }
}

/// Composite `color` over the background of every cell in `area`.
pub(crate) fn blend_bg_area(buf: &mut Buffer, area: Rect, color: PackedRgba) {
    if color.a() == 0 {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = color.over(cell.bg);
            }
        }
    }
}

/// Scale the alpha of every cell color in `area` by `opacity`.
pub(crate) fn fade_area(buf: &mut Buffer, area: Rect, opacity: f32) {
    if opacity >= 1.0 {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.fg = cell.fg.with_opacity(opacity);
                cell.bg = cell.bg.with_opacity(opacity);
            }
        }
    }
}

/// Draw a text span at `(x, y)`, one grapheme per cell run.
///
/// Wide graphemes occupy their display width; the trailing cells are
/// blanked. Zero-width graphemes are skipped. Stops at `max_x` (exclusive)
/// and returns the x position after the last drawn grapheme.
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x as usize + w > max_x as usize {
            break;
        }
        let Some(c) = grapheme.chars().next() else {
            continue;
        };

        let mut cell = Cell::from_char(c);
        style.apply_to(&mut cell);
        buf.set(x, y, cell);
        for pad in 1..w as u16 {
            let mut filler = Cell::from_char(' ');
            style.apply_to(&mut filler);
            buf.set(x + pad, y, filler);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

/// Display width of `text` in cells.
pub(crate) fn text_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(text)
}
