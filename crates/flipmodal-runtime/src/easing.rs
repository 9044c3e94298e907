#![forbid(unsafe_code)]

//! Easing curves.

/// Easing function mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in (accelerating).
    EaseIn,
    /// Cubic ease-out (decelerating).
    EaseOut,
    /// Cubic S-curve.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to progress `t`, clamped to `[0.0, 1.0]`.
    ///
    /// Every curve maps 0 to 0 and 1 to 1 and is monotonic in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for e in ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e:?}");
            assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-12);
        let a = Easing::EaseInOut.apply(0.2);
        let b = Easing::EaseInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ease_in_starts_slow() {
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::EaseInOut.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseInOut.apply(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    proptest! {
        #[test]
        fn curves_are_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for e in ALL {
                prop_assert!(e.apply(lo) <= e.apply(hi) + 1e-12);
            }
        }
    }
}
