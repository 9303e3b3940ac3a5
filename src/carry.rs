//! Quantization carry across integer-quantized reports
//!
//! Scaling a delta and truncating to an integer report drops the fractional
//! remainder every cycle. Under sustained slow motion (factor near the
//! curve's lower limit) that can mean no output at all for several polls in
//! a row, which reads as stutter. The accumulator keeps the dropped
//! fraction per axis and folds it into the next cycle, so the long-run
//! average output matches the scaled input exactly.

use crate::report::{clamp_to_report, MotionSample};

/// Per-axis fractional remainders, each in (-1, 1).
#[derive(Clone, Copy, Debug, Default)]
pub struct CarryState {
    carry_x: f32,
    carry_y: f32,
}

impl CarryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both carries. Called by the pipeline on idle timeout.
    pub fn reset(&mut self) {
        self.carry_x = 0.0;
        self.carry_y = 0.0;
    }

    pub fn carry_x(&self) -> f32 {
        self.carry_x
    }

    pub fn carry_y(&self) -> f32 {
        self.carry_y
    }

    /// Scale a sample by `factor`, folding in and updating the per-axis
    /// carry, and quantize to the report range.
    pub fn apply(&mut self, factor: f32, sample: MotionSample) -> MotionSample {
        MotionSample {
            dx: Self::apply_axis(&mut self.carry_x, factor, sample.dx),
            dy: Self::apply_axis(&mut self.carry_y, factor, sample.dy),
        }
    }

    fn apply_axis(carry: &mut f32, factor: f32, raw: i16) -> i16 {
        // A carry pointing against the new motion direction would fight the
        // reversal; drop it.
        if raw as f32 * *carry < 0.0 {
            *carry = 0.0;
        }

        let scaled = *carry + factor * raw as f32;
        // Carry is taken from the unclamped value so that clamping an
        // extreme report never corrupts future carry.
        *carry = scaled.fract();
        clamp_to_report(scaled.trunc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_preserves_long_run_average() {
        // A constant unit delta at a fractional factor: truncation alone
        // would output zero forever. With carry, the mean output delta must
        // converge to the factor.
        let factor = 0.2;
        let mut carry = CarryState::new();
        let mut total: i64 = 0;
        let cycles = 1000;
        for _ in 0..cycles {
            let out = carry.apply(factor, MotionSample::new(1, 0));
            total += out.dx as i64;
        }
        let mean = total as f32 / cycles as f32;
        assert!(
            (mean - factor).abs() < 0.01,
            "mean output {mean} should converge to factor {factor}"
        );
    }

    #[test]
    fn test_carry_equals_remainder() {
        let mut carry = CarryState::new();
        let out = carry.apply(0.25, MotionSample::new(10, 0));
        // 0.25 * 10 = 2.5 -> report 2, carry 0.5
        assert_eq!(out.dx, 2);
        assert!((carry.carry_x() - 0.5).abs() < 1e-6);
        assert_eq!(out.dy, 0);
        assert_eq!(carry.carry_y(), 0.0);
    }

    #[test]
    fn test_sign_reversal_clears_axis_carry() {
        let mut carry = CarryState::new();
        carry.apply(0.7, MotionSample::new(1, 0));
        assert!(carry.carry_x() > 0.0);

        // Reversed direction: the positive carry must not bleed into the
        // negative stroke.
        let out = carry.apply(0.7, MotionSample::new(-1, 0));
        assert_eq!(out.dx, 0);
        assert!(
            (carry.carry_x() - -0.7).abs() < 1e-6,
            "carry restarts from the reversed stroke alone, got {}",
            carry.carry_x()
        );
    }

    #[test]
    fn test_sign_reversal_is_per_axis() {
        let mut carry = CarryState::new();
        carry.apply(0.7, MotionSample::new(1, 1));
        let x_before = carry.carry_x();
        assert!(x_before > 0.0);

        // Only y reverses; x carry accumulates on.
        carry.apply(0.7, MotionSample::new(1, -1));
        assert!((carry.carry_x() - (x_before + 0.7).fract()).abs() < 1e-6);
        assert!(carry.carry_y() <= 0.0);
    }

    #[test]
    fn test_zero_delta_leaves_carry_untouched() {
        let mut carry = CarryState::new();
        carry.apply(0.7, MotionSample::new(1, 0));
        let before = carry.carry_x();
        carry.apply(0.7, MotionSample::new(0, 0));
        assert_eq!(carry.carry_x(), before);
    }

    #[test]
    fn test_clamping_does_not_corrupt_carry() {
        let mut carry = CarryState::new();
        // Large factor pushes the scaled value past the report range.
        let out = carry.apply(3000.0, MotionSample::new(30000, 0));
        assert_eq!(out.dx, crate::report::XY_REPORT_MAX);
        // Carry still reflects the unclamped fraction: an integral scaled
        // value leaves no remainder.
        assert_eq!(carry.carry_x(), 0.0);
    }

    #[test]
    fn test_reset_clears_both_axes() {
        let mut carry = CarryState::new();
        carry.apply(0.3, MotionSample::new(1, 1));
        carry.reset();
        assert_eq!(carry.carry_x(), 0.0);
        assert_eq!(carry.carry_y(), 0.0);
    }
}
