//! core/deform.rs: the per-frame hair displacement.
//!
//! Maps the control parameters and the elapsed time to a displaced copy of
//! every hair point. Deterministic by construction: the "thermal noise" is a
//! trigonometric function of time and position, not a stochastic process, so
//! time can be scrubbed in either direction and identical inputs always give
//! bit-identical output.

use crate::core::curve::Curve3;
use crate::core::params::ControlParams;

/// Displace every point of every hair. Hairs are processed independently and
/// returned in input order with unchanged point counts. An empty hair passes
/// through untouched.
pub fn deform(
    hairs: &[Curve3],
    params: &ControlParams,
    time: f32,
    curl_multiplier: f32,
) -> Vec<Curve3> {
    hairs
        .iter()
        .enumerate()
        .map(|(i, hair)| deform_hair(hair, i, params, time, curl_multiplier))
        .collect()
}

fn deform_hair(
    hair: &Curve3,
    hair_index: usize,
    params: &ControlParams,
    time: f32,
    curl_multiplier: f32,
) -> Curve3 {
    if hair.is_empty() {
        return hair.clone();
    }

    let mean_z = hair.mean_z();
    let pressure_scale = 1.0 + (params.pressure - 1.0) * 0.3;
    let phase = hair_index as f32;

    let mut out = Curve3::with_capacity(hair.len());
    // Running prefix sum of sin(time + z) along the curve; squared below so
    // the lag term is nonnegative and grows toward the hair tip.
    let mut lag_acc = 0.0f32;
    for k in 0..hair.len() {
        let (x, y, z) = (hair.xs[k], hair.ys[k], hair.zs[k]);

        let noise =
            params.thermal * 0.05 * ((5.0 * time + 10.0 * z).sin() + (3.0 * time + 8.0 * x).cos());
        let grav = params.gravity * (z - mean_z) * 0.1;
        lag_acc += (time + z).sin();
        let inertia = params.inertia * 0.02 * lag_acc * lag_acc;
        let wake =
            params.sleep_wake * 0.15 * (2.0 * time + 4.0 * z + phase).sin() * curl_multiplier;

        out.push(
            x * pressure_scale + noise + grav + inertia + wake,
            y * pressure_scale + 0.5 * noise + wake,
            z + 0.5 * grav,
        );
    }
    out
}
