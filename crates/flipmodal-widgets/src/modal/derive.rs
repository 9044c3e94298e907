#![forbid(unsafe_code)]

//! Style derivation: visibility value -> opacity and transform.
//!
//! Every mapping is a linear interpolation over the input range `[0, 1]`:
//!
//! | Variant | opacity | transform |
//! |---|---|---|
//! | `Default` | 0 -> 1 | scale 1.1 -> 1.0 |
//! | `Vertical` | 0 -> 1 | rotateX 270deg -> 360deg |
//! | `Horizontal` | 0 -> 1 | rotateY 270deg -> 360deg |
//! | `FlipAndScale` | 0 -> 1 | rotateX 0deg -> 360deg, then scale 0 -> 1 |

use flipmodal_runtime::Interpolation;
use flipmodal_style::{AnimatedStyle, Transform};

use super::variant::AnimationVariant;

const OPACITY: Interpolation = Interpolation::unit((0.0, 1.0));
const SETTLE_SCALE: Interpolation = Interpolation::unit((1.1, 1.0));
const FLIP_IN: Interpolation = Interpolation::unit((270.0, 360.0));
const FULL_TURN: Interpolation = Interpolation::unit((0.0, 360.0));
const GROW: Interpolation = Interpolation::unit((0.0, 1.0));

/// Derive the card style for `variant` at visibility `value`.
pub fn derive_style(variant: AnimationVariant, value: f64) -> AnimatedStyle {
    let style = AnimatedStyle::new(OPACITY.eval(value));
    match variant {
        AnimationVariant::Default => style.with(Transform::Scale(SETTLE_SCALE.eval(value))),
        AnimationVariant::Vertical => style.with(Transform::RotateX(FLIP_IN.eval(value))),
        AnimationVariant::Horizontal => style.with(Transform::RotateY(FLIP_IN.eval(value))),
        AnimationVariant::FlipAndScale => style
            .with(Transform::RotateX(FULL_TURN.eval(value)))
            .with(Transform::Scale(GROW.eval(value))),
    }
}
