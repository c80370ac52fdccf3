//! core/container.rs: the gel container tube around the helix.
//!
//! Pressure scales the tube radius (osmotic swelling); gravity adds a small
//! lateral sag to x. Cheap enough to recompute every render pass.

use crate::core::curve::{linspace, SurfaceGrid};
use crate::core::params::ControlParams;
use std::f32::consts::PI;

pub const THETA_SAMPLES: usize = 50;
pub const HEIGHT_SAMPLES: usize = 20;
pub const Z_MIN: f32 = -1.0;
pub const Z_MAX: f32 = 16.0;

/// Parametric tube surface over (θ, z). Rows run over height, columns over
/// angle. Only pressure and gravity participate.
pub fn container_surface(params: &ControlParams) -> SurfaceGrid {
    let theta = linspace(0.0, 2.0 * PI, THETA_SAMPLES);
    let heights = linspace(Z_MIN, Z_MAX, HEIGHT_SAMPLES);
    let radius = 3.0 * params.pressure * 0.8;

    let mut grid = SurfaceGrid::with_capacity(HEIGHT_SAMPLES, THETA_SAMPLES);
    for &z in &heights {
        for &th in &theta {
            grid.xs.push(radius * th.cos() + params.gravity * th.sin() * 0.2);
            grid.ys.push(radius * th.sin());
            grid.zs.push(z);
        }
    }
    grid
}
