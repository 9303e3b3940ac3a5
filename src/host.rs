//! Host capability traits
//!
//! The engine never talks to hardware or storage directly; the host supplies
//! these capabilities at pipeline construction. Keeping them as traits lets
//! tests drive the pipeline with manual clocks and fixed sensitivities.

use std::time::Instant;

/// Monotonic millisecond timer.
pub trait MonotonicClock {
    /// Current monotonic time in milliseconds. Wraps at u32::MAX.
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since an earlier `now_ms` reading,
    /// wraparound-safe.
    fn elapsed_ms(&self, since: u32) -> u32 {
        self.now_ms().wrapping_sub(since)
    }
}

/// Source of the pointing device's configured sensitivity (counts per inch).
///
/// The query may be slow (a sensor register read on some hosts), so the
/// pipeline throttles calls through `velocity::CpiThrottle`.
pub trait CpiSource {
    fn cpi(&mut self) -> u16;
}

/// Backing store for the persisted parameter record.
pub trait ConfigStorage {
    /// Read the whole record. Short or failed reads make the loader fall
    /// back to compiled-in defaults.
    fn read(&mut self) -> Result<Vec<u8>, anyhow::Error>;

    /// Overwrite the record.
    fn write(&mut self, record: &[u8]) -> Result<(), anyhow::Error>;
}

/// `MonotonicClock` over `std::time::Instant` for hosts running on an OS.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u32 {
        self.origin.elapsed().as_millis() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(u32);

    impl MonotonicClock for FixedClock {
        fn now_ms(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_elapsed_is_wraparound_safe() {
        let clock = FixedClock(5);
        // Timer read shortly before the u32 counter wrapped.
        assert_eq!(clock.elapsed_ms(u32::MAX - 4), 10);
        assert_eq!(clock.elapsed_ms(5), 0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
