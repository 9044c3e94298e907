#![forbid(unsafe_code)]

//! Linear range interpolation.

/// Linear map from `input` to `output`. Inputs outside the range continue
/// the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Interpolation {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    /// Map the unit interval onto `output`.
    pub const fn unit(output: (f64, f64)) -> Self {
        Self::new((0.0, 1.0), output)
    }

    /// Evaluate at `x`. A degenerate input range yields the output start.
    pub fn eval(&self, x: f64) -> f64 {
        let (in0, in1) = self.input;
        let (out0, out1) = self.output;
        let span = in1 - in0;
        if span == 0.0 || !span.is_finite() {
            return out0;
        }
        let t = (x - in0) / span;
        // Weighted form keeps both range ends exact.
        out0 * (1.0 - t) + out1 * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_midpoint() {
        let i = Interpolation::unit((270.0, 360.0));
        assert_eq!(i.eval(0.0), 270.0);
        assert_eq!(i.eval(1.0), 360.0);
        assert_eq!(i.eval(0.5), 315.0);
    }

    #[test]
    fn decreasing_output() {
        let i = Interpolation::unit((1.1, 1.0));
        assert!((i.eval(0.5) - 1.05).abs() < 1e-12);
    }

    #[test]
    fn extends_past_range() {
        let i = Interpolation::unit((0.0, 10.0));
        assert_eq!(i.eval(2.0), 20.0);
        assert_eq!(i.eval(-1.0), -10.0);
    }

    #[test]
    fn degenerate_input_range() {
        let i = Interpolation::new((1.0, 1.0), (5.0, 9.0));
        assert_eq!(i.eval(1.0), 5.0);
    }
}
