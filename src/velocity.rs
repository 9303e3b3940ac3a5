//! DPI-normalized velocity estimation
//!
//! Raw deltas scale with the sensor's configured CPI, so the same hand speed
//! reads twice as fast at 1600 CPI as at 800. Normalizing by
//! `MAGNIFICATION / cpi` keeps the velocity domain (and with it the curve's
//! offset parameter) stable across sensitivity settings, and keeps the
//! exponential in the curve numerically well-scaled.

use crate::host::CpiSource;

/// Normalization constant for the DPI correction factor.
pub const MAGNIFICATION: f32 = 1000.0;

/// Minimum time between CPI queries. Reading the sensitivity can be slow on
/// some hosts and it does not change mid-motion.
pub const CPI_THROTTLE_MS: u32 = 200;

/// Correction factor that normalizes raw deltas to a CPI-independent scale.
pub fn dpi_correction(cpi: u16) -> f32 {
    // A sensor reporting CPI 0 is misbehaving; floor it so the correction
    // stays finite.
    MAGNIFICATION / cpi.max(1) as f32
}

/// Scalar velocity of a motion sample in normalized counts per millisecond.
///
/// `elapsed_ms` must be nonzero; the pipeline floors it before calling in.
pub fn velocity(dx: i16, dy: i16, elapsed_ms: u32, cpi: u16) -> f32 {
    let dx = dx as f32;
    let dy = dy as f32;
    let distance = (dx * dx + dy * dy).sqrt();
    dpi_correction(cpi) * distance / elapsed_ms as f32
}

/// Caches the device CPI between throttled re-reads.
pub struct CpiThrottle {
    cached: u16,
    last_read_ms: Option<u32>,
}

impl CpiThrottle {
    pub fn new() -> Self {
        Self {
            cached: 0,
            last_read_ms: None,
        }
    }

    /// Current CPI: re-queries the source only when more than
    /// `CPI_THROTTLE_MS` has passed since the previous read, otherwise
    /// returns the cached value. The first call always queries.
    pub fn sample(&mut self, now_ms: u32, source: &mut dyn CpiSource) -> u16 {
        let stale = match self.last_read_ms {
            Some(last) => now_ms.wrapping_sub(last) > CPI_THROTTLE_MS,
            None => true,
        };
        if stale {
            self.cached = source.cpi();
            self.last_read_ms = Some(now_ms);
        }
        self.cached
    }
}

impl Default for CpiThrottle {
    fn default() -> Self {
        Self::new()
    }
}
