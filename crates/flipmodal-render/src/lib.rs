#![forbid(unsafe_code)]

//! Render kernel: packed colors, cells, cell buffers, and frames with an
//! optional hit grid for mouse hit testing.

pub mod buffer;
pub mod cell;
pub mod frame;
