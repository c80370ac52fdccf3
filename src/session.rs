//! session.rs: per-session mutable state.
//!
//! One `Session` per viewer; nothing here is global, so concurrent sessions
//! cannot interfere. The animation clock only moves forward.

use crate::core::params::{ControlParams, Preset};

#[derive(Clone, Debug)]
pub struct Session {
    params: ControlParams,
    anim_time: f32,
    reset_time_on_preset: bool,
}

impl Session {
    pub fn new(reset_time_on_preset: bool) -> Self {
        Self {
            params: ControlParams::default(),
            anim_time: 0.0,
            reset_time_on_preset,
        }
    }

    #[inline]
    pub fn params(&self) -> &ControlParams {
        &self.params
    }

    #[inline]
    pub fn anim_time(&self) -> f32 {
        self.anim_time
    }

    /// Replace the parameter snapshot; out-of-range fields clamp.
    pub fn set_params(&mut self, params: ControlParams) {
        self.params = params.clamped();
    }

    /// Advance the animation clock. Negative increments are ignored so the
    /// clock never runs backwards within a session.
    pub fn advance(&mut self, dt: f32) {
        self.anim_time += dt.max(0.0);
    }

    /// Load a preset. Only the B-DNA preset may reset the clock, and only
    /// when the session was configured to do so.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.params = preset.params().clamped();
        if self.reset_time_on_preset && preset == Preset::BDna {
            self.anim_time = 0.0;
        }
    }
}
