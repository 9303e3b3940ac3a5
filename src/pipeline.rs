//! Per-poll transform pipeline
//!
//! Composes the velocity estimator, the acceleration curve and the carry
//! accumulator into the single `transform` call the host invokes once per
//! polling cycle. The pipeline owns all cross-cycle state: the parameter
//! store, the inter-sample timer, the CPI throttle and the carry state.

use crate::carry::CarryState;
use crate::config::AccelConfig;
use crate::curve::accel_factor;
use crate::host::{CpiSource, MonotonicClock};
use crate::report::MotionSample;
use crate::velocity::{velocity, CpiThrottle};

/// Idle time after which the carry state is considered stale and cleared.
pub const IDLE_TIMEOUT_MS: u32 = 300;

/// The acceleration pipeline. One instance per pointing device.
pub struct AccelPipeline {
    config: AccelConfig,
    carry: CarryState,
    cpi_throttle: CpiThrottle,
    // Timestamp of the last nonzero sample; None until the first one.
    last_sample_ms: Option<u32>,
    clock: Box<dyn MonotonicClock>,
    cpi_source: Box<dyn CpiSource>,
}

impl AccelPipeline {
    pub fn new(
        config: AccelConfig,
        clock: Box<dyn MonotonicClock>,
        cpi_source: Box<dyn CpiSource>,
    ) -> Self {
        Self {
            config,
            carry: CarryState::new(),
            cpi_throttle: CpiThrottle::new(),
            last_sample_ms: None,
            clock,
            cpi_source,
        }
    }

    pub fn config(&self) -> &AccelConfig {
        &self.config
    }

    /// Mutable access for the tuning adapter and the remote-config path.
    pub fn config_mut(&mut self) -> &mut AccelConfig {
        &mut self.config
    }

    /// Transform one raw sample into its acceleration-corrected report.
    ///
    /// Zero samples and a disabled store pass through unchanged, but still
    /// run the idle-timeout check (which may clear the carry state). The
    /// very first nonzero sample only initializes the timer and passes
    /// through: there is no elapsed-time base to derive a velocity from yet.
    pub fn transform(&mut self, sample: MotionSample) -> MotionSample {
        let now = self.clock.now_ms();

        if sample.is_zero() || !self.config.enabled() {
            self.expire_idle_carry(now);
            return sample;
        }

        let last = match self.last_sample_ms {
            Some(last) => last,
            None => {
                self.last_sample_ms = Some(now);
                return sample;
            }
        };

        // Two samples inside the same millisecond still need a nonzero
        // divisor for the velocity estimate.
        let elapsed = now.wrapping_sub(last).max(1);
        if elapsed >= IDLE_TIMEOUT_MS {
            self.carry.reset();
        }
        self.last_sample_ms = Some(now);

        let cpi = self.cpi_throttle.sample(now, self.cpi_source.as_mut());
        let v = velocity(sample.dx, sample.dy, elapsed, cpi);
        let factor = accel_factor(v, &self.config);
        let out = self.carry.apply(factor, sample);

        log::debug!("cpi = {cpi}, velocity = {v:.4}, factor = {factor:.4}");

        out
    }

    fn expire_idle_carry(&mut self, now: u32) {
        if let Some(last) = self.last_sample_ms {
            if now.wrapping_sub(last) >= IDLE_TIMEOUT_MS {
                self.carry.reset();
            }
        }
    }
}
