//! Pointer acceleration engine
//!
//! Transforms raw relative motion samples from a pointing device into
//! acceleration-corrected reports: fast hand motion is scaled up toward the
//! curve's upper asymptote while slow, precise motion can be attenuated,
//! independent of the sensor's configured CPI. The host's polling loop calls
//! [`AccelPipeline::transform`] once per cycle; everything else (CPI query,
//! monotonic timer, persistent storage, key dispatch) is supplied by the
//! host through the capability traits in [`host`].

pub mod carry;
pub mod config;
pub mod curve;
pub mod host;
pub mod pipeline;
pub mod report;
pub mod tuning;
pub mod utils;
pub mod velocity;
pub mod wire;

pub use config::AccelConfig;
pub use pipeline::AccelPipeline;
pub use report::MotionSample;
pub use tuning::{KeyEvent, Modifiers, TuningKeys};
