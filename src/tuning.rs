//! Live tuning from host key events
//!
//! The host assigns one opaque selector code per curve parameter plus one
//! for the enable toggle, and forwards key events here from its dispatch
//! loop. A press on a parameter selector nudges that parameter by its step,
//! ×10 under the amplify modifier and negated under the invert modifier.
//! Handled events return true so the host suppresses default processing.

use crate::config::{
    AccelConfig, GROWTH_RATE_STEP, LIMIT_STEP, OFFSET_STEP, TAKEOFF_STEP,
};

/// One key event as seen by the host's dispatch loop.
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub code: u16,
    pub pressed: bool,
}

/// Modifier state sampled by the host at dispatch time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Modifiers {
    /// Scales the step ×10.
    pub amplify: bool,
    /// Negates the step.
    pub invert: bool,
}

impl Modifiers {
    fn step(&self, base: f32) -> f32 {
        let mut step = base;
        if self.amplify {
            step *= 10.0;
        }
        if self.invert {
            step = -step;
        }
        step
    }
}

/// Host-configured selector codes for the tuning keys.
#[derive(Clone, Copy, Debug)]
pub struct TuningKeys {
    pub takeoff: u16,
    pub growth_rate: u16,
    pub offset: u16,
    pub limit: u16,
    pub toggle: u16,
}

impl TuningKeys {
    /// Route one key event to the parameter store.
    ///
    /// Returns true when the event was consumed. Releases and unmatched
    /// codes are left for the host's default handling. A step that would
    /// leave a parameter's domain is silently rejected by the store, so
    /// repeated presses park at the boundary.
    pub fn handle_event(
        &self,
        config: &mut AccelConfig,
        event: KeyEvent,
        mods: Modifiers,
    ) -> bool {
        if !event.pressed {
            return false;
        }

        let code = event.code;
        if code == self.toggle {
            config.toggle_enabled();
            log::info!("accel enabled: {}", config.enabled());
            return true;
        }

        if code == self.takeoff {
            config.set_takeoff(config.takeoff() + mods.step(TAKEOFF_STEP));
        } else if code == self.growth_rate {
            config.set_growth_rate(config.growth_rate() + mods.step(GROWTH_RATE_STEP));
        } else if code == self.offset {
            config.set_offset(config.offset() + mods.step(OFFSET_STEP));
        } else if code == self.limit {
            config.set_limit(config.limit() + mods.step(LIMIT_STEP));
        } else {
            return false;
        }

        log::info!(
            "takeoff: {:.3} growth_rate: {:.3} offset: {:.3} limit: {:.3}",
            config.takeoff(),
            config.growth_rate(),
            config.offset(),
            config.limit()
        );
        true
    }
}
