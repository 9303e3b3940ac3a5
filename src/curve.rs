//! Generalized logistic acceleration curve
//!
//! Maps a DPI-normalized velocity to a dimensionless scale factor. Far below
//! the offset velocity the factor approaches `limit` (attenuating slow,
//! precise motion when limit < 1); far above it the factor approaches the
//! upper asymptote of 1 — amplification beyond the raw delta is left to the
//! host's configured sensitivity.

use crate::config::AccelConfig;

/// Calculate the scale factor for a given velocity.
///
/// The curve is a generalized logistic function:
///
/// `factor = upper - (upper - limit) / (1 + e^(takeoff * (v - offset)))^(growth_rate / takeoff)`
///
/// `takeoff` controls sharpness near the transition, `growth_rate` how fast
/// the curve climbs, and `offset` the midpoint velocity. Pure and stateless;
/// for velocities where the exponential saturates, the factor settles on the
/// corresponding asymptote rather than overflowing.
pub fn accel_factor(velocity: f32, config: &AccelConfig) -> f32 {
    let takeoff = config.takeoff();
    let upper = config.upper_limit();
    let limit = config.limit();

    let base = 1.0 + (takeoff * (velocity - config.offset())).exp();
    upper - (upper - limit) / base.powf(config.growth_rate() / takeoff)
}
