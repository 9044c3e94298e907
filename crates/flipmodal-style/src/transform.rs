#![forbid(unsafe_code)]

//! Opacity and transform styles, and their projection onto the cell grid.
//!
//! A terminal cannot rotate or resample glyphs, so a transformed card is
//! drawn as its axis-aligned footprint:
//!
//! - `Scale(s)` multiplies width and height by `s`.
//! - `RotateX(deg)` tilts around the horizontal axis; the visible height is
//!   `|cos(deg)|` of the original.
//! - `RotateY(deg)` tilts around the vertical axis; the visible width is
//!   `|cos(deg)|` of the original.
//!
//! Transforms compose in list order. Since every factor is a multiplier on
//! one or both axes, the footprint does not depend on that order.

use flipmodal_core::geometry::Size;
use smallvec::SmallVec;

/// A single transform operation. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Scale(f64),
    RotateX(f64),
    RotateY(f64),
}

impl Transform {
    /// Horizontal and vertical footprint multipliers.
    pub fn axis_factors(self) -> (f64, f64) {
        match self {
            Self::Scale(s) => {
                let s = s.max(0.0);
                (s, s)
            }
            Self::RotateX(deg) => (1.0, deg.to_radians().cos().abs()),
            Self::RotateY(deg) => (deg.to_radians().cos().abs(), 1.0),
        }
    }
}

/// Opacity plus an ordered transform list.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedStyle {
    pub opacity: f64,
    pub transform: SmallVec<[Transform; 2]>,
}

impl Default for AnimatedStyle {
    fn default() -> Self {
        Self::identity()
    }
}

impl AnimatedStyle {
    /// Fully opaque, untransformed.
    pub fn identity() -> Self {
        Self {
            opacity: 1.0,
            transform: SmallVec::new(),
        }
    }

    pub fn new(opacity: f64) -> Self {
        Self {
            opacity,
            transform: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, transform: Transform) -> Self {
        self.transform.push(transform);
        self
    }

    /// Product of all `Scale` entries (1.0 when none).
    pub fn scale(&self) -> f64 {
        self.transform
            .iter()
            .filter_map(|t| match t {
                Transform::Scale(s) => Some(*s),
                _ => None,
            })
            .product()
    }

    /// Last `RotateX` angle, if any.
    pub fn rotate_x(&self) -> Option<f64> {
        self.transform.iter().rev().find_map(|t| match t {
            Transform::RotateX(deg) => Some(*deg),
            _ => None,
        })
    }

    /// Last `RotateY` angle, if any.
    pub fn rotate_y(&self) -> Option<f64> {
        self.transform.iter().rev().find_map(|t| match t {
            Transform::RotateY(deg) => Some(*deg),
            _ => None,
        })
    }

    /// Combined horizontal and vertical footprint multipliers.
    pub fn axis_factors(&self) -> (f64, f64) {
        self.transform
            .iter()
            .fold((1.0, 1.0), |(fx, fy), t| {
                let (tx, ty) = t.axis_factors();
                (fx * tx, fy * ty)
            })
    }

    /// Footprint of a `size` card after applying the transforms.
    ///
    /// Dimensions are rounded to the nearest cell and saturate at `u16::MAX`.
    pub fn project(&self, size: Size) -> Size {
        let (fx, fy) = self.axis_factors();
        let scale = |len: u16, f: f64| -> u16 {
            let v = (len as f64 * f).round();
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                v.min(u16::MAX as f64) as u16
            }
        };
        Size::new(scale(size.width, fx), scale(size.height, fy))
    }

    /// Opacity clamped to `[0.0, 1.0]`.
    pub fn clamped_opacity(&self) -> f32 {
        if self.opacity.is_nan() {
            return 0.0;
        }
        self.opacity.clamp(0.0, 1.0) as f32
    }
}
