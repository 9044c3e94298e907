#![forbid(unsafe_code)]

//! Core types for flipmodal: cell-space geometry and input events.

pub mod event;
pub mod geometry;
