#![forbid(unsafe_code)]

//! Style types for flipmodal.
//!
//! This crate provides:
//! - [`Style`] for cell colors applied over an area
//! - [`AnimatedStyle`] and [`Transform`] for opacity/scale/rotation styles and
//!   their projection onto the cell grid
//! - [`LayoutStyle`] for absolute placement rules

pub mod layout;
pub mod style;
pub mod transform;

pub use layout::{Align, LayoutStyle};
pub use style::Style;
pub use transform::{AnimatedStyle, Transform};
