//! pipeline.rs: one render pass over the core.
//!
//! Fixed invocation order each pass: classify (when the reaction policy is
//! enabled, since its curl multiplier feeds the deformation), deform the
//! hairs, rebuild the container surface, then score stability from the
//! resulting warning count. The structural geometry is taken by reference
//! and never recomputed here.

use crate::core::container::container_surface;
use crate::core::curve::{marker_indices, Curve3, SurfaceGrid};
use crate::core::deform::deform;
use crate::core::helix::HelixStructure;
use crate::core::reaction::{classify, Reaction};
use crate::core::stability::stability;
use crate::session::Session;

#[derive(Clone, Copy, Debug)]
pub struct FrameOptions {
    pub reactions_enabled: bool,
    pub marker_count: usize,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            reactions_enabled: true,
            marker_count: 50,
        }
    }
}

/// Everything the renderer consumes for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub strand_a: Curve3,
    pub strand_b: Curve3,
    pub centerline: Curve3,
    pub hairs: Vec<Curve3>,
    /// Evenly spaced "spark" points sampled from the flattened hairs.
    pub markers: Curve3,
    pub container: SurfaceGrid,
    pub stability: f32,
    pub reaction: Option<Reaction>,
    pub time: f32,
}

pub fn render_frame(
    structure: &HelixStructure,
    session: &Session,
    opts: &FrameOptions,
) -> FrameOutput {
    let params = session.params();
    let time = session.anim_time();

    let reaction = opts.reactions_enabled.then(|| classify(params));
    let curl_multiplier = reaction.as_ref().map_or(1.0, |r| r.curl_multiplier);
    let warning_count = reaction.as_ref().map_or(0, |r| r.warnings.len());

    let hairs = deform(&structure.hairs, params, time, curl_multiplier);

    let mut flat = Curve3::default();
    for hair in &hairs {
        flat.extend_from(hair);
    }
    let mut markers = Curve3::with_capacity(opts.marker_count);
    for i in marker_indices(flat.len(), opts.marker_count) {
        markers.push(flat.xs[i], flat.ys[i], flat.zs[i]);
    }

    FrameOutput {
        strand_a: structure.strand_a.clone(),
        strand_b: structure.strand_b.clone(),
        centerline: structure.centerline.clone(),
        hairs,
        markers,
        container: container_surface(params),
        stability: stability(params, warning_count),
        reaction,
        time,
    }
}
