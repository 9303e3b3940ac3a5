//! Tunable parameters of the acceleration curve
//!
//! The store owns the four curve parameters plus the enable flag. Setters
//! validate against each field's domain and silently reject out-of-range
//! input (the stored value is left unchanged) rather than clamping or
//! erroring; remote configuration clamps before calling in (see `wire`).

/// Default curve parameters.
pub const DEFAULT_TAKEOFF: f32 = 2.0;
pub const DEFAULT_GROWTH_RATE: f32 = 0.25;
pub const DEFAULT_OFFSET: f32 = 2.2;
pub const DEFAULT_LIMIT: f32 = 0.2;

/// Smallest accepted takeoff. Below this the exponent `growth_rate / takeoff`
/// blows up and the curve degenerates.
pub const TAKEOFF_MIN: f32 = 0.5;

/// Upper asymptote of the curve. Fixed at 1: amplification beyond the raw
/// delta is the host sensitivity's job, not the curve's.
pub const UPPER_LIMIT: f32 = 1.0;

/// Live-tuning step sizes per parameter (see `tuning`).
pub const TAKEOFF_STEP: f32 = 0.01;
pub const GROWTH_RATE_STEP: f32 = 0.01;
pub const OFFSET_STEP: f32 = 0.1;
pub const LIMIT_STEP: f32 = 0.01;

/// Parameter store for the acceleration curve.
///
/// Domains: takeoff ≥ 0.5, growth_rate ≥ 0, limit ≥ 0, offset unrestricted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelConfig {
    takeoff: f32,
    growth_rate: f32,
    offset: f32,
    limit: f32,
    enabled: bool,
}

impl AccelConfig {
    pub fn new() -> Self {
        Self {
            takeoff: DEFAULT_TAKEOFF,
            growth_rate: DEFAULT_GROWTH_RATE,
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
            enabled: true,
        }
    }

    pub fn takeoff(&self) -> f32 {
        self.takeoff
    }

    pub fn growth_rate(&self) -> f32 {
        self.growth_rate
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn upper_limit(&self) -> f32 {
        UPPER_LIMIT
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Set curve sharpness near the transition. Rejected below 0.5.
    pub fn set_takeoff(&mut self, val: f32) {
        if val >= TAKEOFF_MIN {
            self.takeoff = val;
        }
    }

    /// Set how quickly the curve climbs. Rejected below 0.
    pub fn set_growth_rate(&mut self, val: f32) {
        if val >= 0.0 {
            self.growth_rate = val;
        }
    }

    /// Set the midpoint velocity of the curve. Any finite value is accepted.
    pub fn set_offset(&mut self, val: f32) {
        if val.is_finite() {
            self.offset = val;
        }
    }

    /// Set the curve's lower asymptote. Rejected below 0.
    pub fn set_limit(&mut self, val: f32) {
        if val >= 0.0 {
            self.limit = val;
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self::new()
    }
}
