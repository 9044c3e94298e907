#![forbid(unsafe_code)]

//! Frames: a buffer plus an optional hit grid.
//!
//! Widgets register hit regions while rendering; input handling later asks
//! the frame which region lies under a pointer position. Later registrations
//! overwrite earlier ones, so the last-rendered layer wins.

use flipmodal_core::geometry::Rect;

use crate::buffer::Buffer;

/// Identifier of the widget that owns a hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitId(u32);

impl HitId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Which part of a widget was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    #[default]
    Content,
    Custom(u8),
}

/// Opaque per-region payload chosen by the widget.
pub type HitData = u64;

type HitEntry = (HitId, HitRegion, HitData);

#[derive(Debug, Clone)]
struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<HitEntry>>,
}

impl HitGrid {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    fn register(&mut self, area: Rect, entry: HitEntry) {
        let area = area.intersection(&Rect::new(0, 0, self.width, self.height));
        for y in area.y..area.bottom() {
            let row = y as usize * self.width as usize;
            for x in area.x..area.right() {
                self.cells[row + x as usize] = Some(entry);
            }
        }
    }

    fn get(&self, x: u16, y: u16) -> Option<HitEntry> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }
}

/// A render target handed to widgets.
#[derive(Debug, Clone)]
pub struct Frame {
    pub buffer: Buffer,
    hit_grid: Option<HitGrid>,
}

impl Frame {
    /// Frame without hit testing.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
        }
    }

    /// Frame that records hit regions.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
        }
    }

    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    pub fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Register a hit region. No-op when the frame has no hit grid.
    pub fn register_hit(&mut self, area: Rect, id: HitId, region: HitRegion, data: HitData) {
        if let Some(grid) = self.hit_grid.as_mut() {
            grid.register(area, (id, region, data));
        }
    }

    /// Topmost hit region at `(x, y)`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|grid| grid.get(x, y))
    }
}
