/// Minimum per-axis delta a single report can carry.
pub const XY_REPORT_MIN: i16 = -32767;
/// Maximum per-axis delta a single report can carry.
pub const XY_REPORT_MAX: i16 = 32767;

/// One relative motion sample from the pointing device: the (dx, dy) counts
/// accumulated since the previous poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionSample {
    pub dx: i16,
    pub dy: i16,
}

impl MotionSample {
    pub fn new(dx: i16, dy: i16) -> Self {
        Self { dx, dy }
    }

    /// True when the sample carries no motion on either axis.
    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Clamp a scaled value to the report range to prevent over- and underflows.
pub(crate) fn clamp_to_report(val: f32) -> i16 {
    if val < XY_REPORT_MIN as f32 {
        XY_REPORT_MIN
    } else if val > XY_REPORT_MAX as f32 {
        XY_REPORT_MAX
    } else {
        val as i16
    }
}
