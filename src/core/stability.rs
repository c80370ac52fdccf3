//! core/stability.rs: the heuristic stability score.

use crate::core::params::ControlParams;

/// Reference value the UI shows the delta against.
pub const BASELINE: f32 = 50.0;

/// Composite display score. Deliberately unclamped: it may exceed 100 or go
/// negative. Higher thermal/gravity lower it, higher pressure raises it, and
/// each active warning subtracts 20 points.
pub fn stability(params: &ControlParams, warning_count: usize) -> f32 {
    100.0
        * (1.0 - params.thermal / 5.0 - params.gravity / 3.0 + params.pressure
            - 0.2 * warning_count as f32)
}
