//! core/helix.rs: the fixed double-helix structural geometry.
//!
//! Two antiparallel backbone strands, their centerline, and 20 curl-shaped
//! hair curves rooted at evenly spaced points along the backbone. Pure
//! function of the structural constants; generated once per session and
//! shared read-only afterwards.

use crate::core::curve::{linspace, Curve3};
use std::f32::consts::PI;

/// Structural constants of the helix. The hair chunking pair
/// {hair_count, hair_points} is shared with the deformation engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixSpec {
    pub radius: f32,
    pub pitch: f32,
    pub samples: usize,
    pub t_max: f32,
    pub hair_count: usize,
    pub hair_points: usize,
}

impl Default for HelixSpec {
    fn default() -> Self {
        Self {
            radius: 1.34,
            pitch: 3.4 / (2.0 * PI),
            samples: 1000,
            t_max: 4.0 * PI,
            hair_count: 20,
            hair_points: 50,
        }
    }
}

/// The immutable structural geometry: both strands, the centerline, and the
/// undeformed hair curves.
#[derive(Clone, Debug, PartialEq)]
pub struct HelixStructure {
    pub spec: HelixSpec,
    pub strand_a: Curve3,
    pub strand_b: Curve3,
    pub centerline: Curve3,
    pub hairs: Vec<Curve3>,
}

impl HelixStructure {
    /// Sample the helix and its hairs. Deterministic: identical specs yield
    /// identical output, so the result is safe to compute once and reuse.
    pub fn generate(spec: HelixSpec) -> Self {
        assert!(spec.samples >= 2);
        assert!(spec.hair_count > 0 && spec.hair_points > 0);
        assert!(spec.samples >= spec.hair_count);

        let r = spec.radius;
        let p = spec.pitch;
        let t = linspace(0.0, spec.t_max, spec.samples);

        let mut strand_a = Curve3::with_capacity(spec.samples);
        let mut strand_b = Curve3::with_capacity(spec.samples);
        let mut centerline = Curve3::with_capacity(spec.samples);
        for &ti in &t {
            let (ax, ay) = (r * ti.cos(), r * ti.sin());
            let (bx, by) = (r * (ti + PI).cos(), r * (ti + PI).sin());
            let z = p * ti;
            strand_a.push(ax, ay, z);
            strand_b.push(bx, by, z);
            centerline.push(0.5 * (ax + bx), 0.5 * (ay + by), z);
        }

        // One hair base at every (samples / hair_count)-th backbone sample.
        let stride = spec.samples / spec.hair_count;
        let s = linspace(0.0, PI, spec.hair_points);
        let mut hairs = Vec::with_capacity(spec.hair_count);
        for k in 0..spec.hair_count {
            let bt = t[k * stride];
            let bx = r * bt.cos() * 1.5;
            let by = r * bt.sin() * 1.5;
            let bz = p * bt;
            let mut hair = Curve3::with_capacity(spec.hair_points);
            for &si in &s {
                hair.push(
                    bx + 0.3 * (si + bt).cos() + 0.1 * (3.0 * si).sin(),
                    by + 0.2 * si.sin() + 0.15 * (2.0 * si).cos(),
                    bz + 0.4 * si,
                );
            }
            hairs.push(hair);
        }

        Self {
            spec,
            strand_a,
            strand_b,
            centerline,
            hairs,
        }
    }
}
