use helicoil::core::helix::{HelixSpec, HelixStructure};
use helicoil::core::params::ControlParams;
use helicoil::core::reaction::ReactionColor;
use helicoil::pipeline::{render_frame, FrameOptions};
use helicoil::session::Session;

fn structure() -> HelixStructure {
    HelixStructure::generate(HelixSpec::default())
}

#[test]
fn frame_carries_every_render_input() {
    let s = structure();
    let mut session = Session::new(false);
    session.advance(0.5);

    let frame = render_frame(&s, &session, &FrameOptions::default());
    assert_eq!(frame.strand_a.len(), 1000);
    assert_eq!(frame.strand_b.len(), 1000);
    assert_eq!(frame.centerline.len(), 1000);
    assert_eq!(frame.hairs.len(), 20);
    assert!(frame.hairs.iter().all(|h| h.len() == 50));
    assert_eq!(frame.markers.len(), 50);
    assert_eq!(frame.container.n_rows, 20);
    assert_eq!(frame.container.n_cols, 50);
    assert_eq!(frame.time, session.anim_time());
    assert!(frame.reaction.is_some());
}

#[test]
fn disabled_policy_means_no_reaction_and_unit_curl() {
    let s = structure();
    let mut session = Session::new(false);
    // Parameters that would fire the gravity rule.
    session.set_params(ControlParams::new(0.0, 2.5, 0.0, 1.0, 1.0));
    session.advance(1.0);

    let opts_off = FrameOptions {
        reactions_enabled: false,
        ..FrameOptions::default()
    };
    let off = render_frame(&s, &session, &opts_off);
    assert!(off.reaction.is_none());

    let on = render_frame(&s, &session, &FrameOptions::default());
    let reaction = on.reaction.expect("policy enabled");
    assert_eq!(reaction.color, ReactionColor::Red);
    assert_eq!(reaction.curl_multiplier, 2.0);

    // The doubled curl multiplier must actually amplify the wake term.
    let diff = on
        .hairs
        .iter()
        .zip(&off.hairs)
        .flat_map(|(a, b)| a.xs.iter().zip(&b.xs))
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f32, f32::max);
    assert!(diff > 1e-4, "curl multiplier had no visible effect");
}

#[test]
fn warning_count_feeds_the_stability_score() {
    let s = structure();
    let mut session = Session::new(false);
    session.set_params(ControlParams::new(0.0, 2.5, 0.0, 1.0, 0.0));

    let with_policy = render_frame(&s, &session, &FrameOptions::default());
    let without = render_frame(
        &s,
        &session,
        &FrameOptions {
            reactions_enabled: false,
            ..FrameOptions::default()
        },
    );
    // One warning: 20 points lower.
    assert!((without.stability - with_policy.stability - 20.0).abs() < 1e-3);
}

#[test]
fn repeated_passes_are_reproducible() {
    let s = structure();
    let mut session = Session::new(false);
    session.set_params(ControlParams::new(2.0, 1.0, 1.0, 1.5, 1.0));
    session.advance(3.25);

    let opts = FrameOptions::default();
    let a = render_frame(&s, &session, &opts);
    let b = render_frame(&s, &session, &opts);
    assert_eq!(a.hairs, b.hairs);
    assert_eq!(a.markers, b.markers);
    assert_eq!(a.container, b.container);
    assert_eq!(a.stability, b.stability);
}

#[test]
fn structure_is_never_mutated_by_rendering() {
    let s = structure();
    let baseline = s.clone();
    let mut session = Session::new(false);
    for _ in 0..10 {
        session.advance(0.1);
        let _ = render_frame(&s, &session, &FrameOptions::default());
    }
    assert_eq!(s, baseline);
}
