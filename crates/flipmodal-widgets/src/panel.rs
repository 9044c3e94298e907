#![forbid(unsafe_code)]

//! Panel widget: border + optional title + centered body text.

use crate::{Widget, draw_text_span, set_style_area, text_width};
use flipmodal_core::geometry::Rect;
use flipmodal_render::cell::Cell;
use flipmodal_render::frame::Frame;
use flipmodal_style::Style;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// A bordered box with an optional title and centered lines of text.
#[derive(Debug, Clone, Default)]
pub struct Panel<'a> {
    title: Option<&'a str>,
    body: &'a str,
    style: Style,
    border_style: Style,
}

impl<'a> Panel<'a> {
    pub fn new(body: &'a str) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Area inside the border.
    pub fn inner(&self, area: Rect) -> Rect {
        if area.width < 2 || area.height < 2 {
            return Rect::new(area.x, area.y, 0, 0);
        }
        Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2)
    }

    fn render_border(&self, area: Rect, frame: &mut Frame) {
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;
        let style = self.style.patch(self.border_style);
        let mut put = |x: u16, y: u16, c: char| {
            if let Some(cell) = frame.buffer.get_mut(x, y) {
                *cell = Cell {
                    content: c,
                    ..*cell
                };
                style.apply_to(cell);
            }
        };

        for x in area.x + 1..right {
            put(x, area.y, HORIZONTAL);
            put(x, bottom, HORIZONTAL);
        }
        for y in area.y + 1..bottom {
            put(area.x, y, VERTICAL);
            put(right, y, VERTICAL);
        }
        put(area.x, area.y, TOP_LEFT);
        put(right, area.y, TOP_RIGHT);
        put(area.x, bottom, BOTTOM_LEFT);
        put(right, bottom, BOTTOM_RIGHT);
    }
}

impl Widget for Panel<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Panel",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        // Clear to blanks so the backdrop glyphs do not bleed through.
        frame.buffer.fill(area, Cell::default());
        set_style_area(&mut frame.buffer, area, self.style);

        if area.width < 2 || area.height < 2 {
            return;
        }
        self.render_border(area, frame);

        if let Some(title) = self.title {
            let max_x = area.right() - 1;
            let title_style = self.style.patch(self.border_style);
            draw_text_span(&mut frame.buffer, area.x + 1, area.y, title, title_style, max_x);
        }

        let inner = self.inner(area);
        if inner.is_empty() {
            return;
        }
        let lines: Vec<&str> = self.body.lines().collect();
        let visible = lines.len().min(inner.height as usize);
        let top = inner.y + (inner.height - visible as u16) / 2;
        for (row, line) in lines.iter().take(visible).enumerate() {
            let width = text_width(line).min(inner.width as usize) as u16;
            let x = inner.x + (inner.width - width) / 2;
            draw_text_span(
                &mut frame.buffer,
                x,
                top + row as u16,
                line,
                self.style,
                inner.right(),
            );
        }
    }
}
