#![forbid(unsafe_code)]

//! A fixed-size grid of cells.
//!
//! # Invariants
//!
//! - `cells.len() == width * height` for the lifetime of the buffer.
//! - Out-of-bounds reads return `None`; out-of-bounds writes are ignored.

use flipmodal_core::geometry::Rect;

use crate::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area anchored at the origin.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Write a cell; ignored outside the buffer.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Overwrite every cell in `area` (clipped to the buffer).
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Glyph content row by row, for assertions and plain-text output.
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .map(|row| row.iter().map(|c| c.content).collect())
            .collect()
    }
}
