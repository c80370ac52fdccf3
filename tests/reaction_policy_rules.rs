use helicoil::core::params::ControlParams;
use helicoil::core::reaction::{classify, ReactionColor};

fn quiet() -> ControlParams {
    // Everything at the bottom of its range; pressure floor is 0.5.
    ControlParams::new(0.0, 0.0, 0.0, 0.5, 0.0)
}

#[test]
fn no_rule_fires_at_rest() {
    let r = classify(&quiet());
    assert_eq!(r.color, ReactionColor::Baseline);
    assert_eq!(r.curl_multiplier, 1.0);
    assert!(r.warnings.is_empty());
}

#[test]
fn gravity_alone_selects_red_and_doubles_curl() {
    let mut p = quiet();
    p.gravity = 2.5;
    let r = classify(&p);
    assert_eq!(r.color, ReactionColor::Red);
    assert_eq!(r.curl_multiplier, 2.0);
    assert_eq!(r.warnings, vec!["too much G-forces"]);
}

#[test]
fn later_rule_wins_color_but_warnings_accumulate() {
    let mut p = quiet();
    p.gravity = 2.5;
    p.thermal = 3.5;
    let r = classify(&p);
    // Thermal is evaluated after gravity: its color/multiplier stand.
    assert_eq!(r.color, ReactionColor::Yellow);
    assert_eq!(r.curl_multiplier, 1.5);
    assert_eq!(r.warnings, vec!["too much G-forces", "thermal overload"]);
}

#[test]
fn multiplier_free_rules_keep_the_previous_multiplier() {
    let mut p = quiet();
    p.gravity = 2.5;
    p.inertia = 1.8;
    let r = classify(&p);
    // Inertia overrides the color but carries no multiplier of its own.
    assert_eq!(r.color, ReactionColor::Green);
    assert_eq!(r.curl_multiplier, 2.0);
    assert_eq!(r.warnings.len(), 2);
}

#[test]
fn all_rules_can_fire_together() {
    let p = ControlParams::new(5.0, 3.0, 2.0, 2.5, 2.0);
    let r = classify(&p);
    assert_eq!(r.warnings.len(), 5);
    assert_eq!(
        r.warnings,
        vec![
            "too much G-forces",
            "thermal overload",
            "high pressure",
            "inertia whip",
            "sleep/wake chaos",
        ]
    );
    // Last firing rule in table order is sleep/wake.
    assert_eq!(r.color, ReactionColor::Pink);
    // Last multiplier-bearing rule is pressure.
    assert_eq!(r.curl_multiplier, 1.2);
}

#[test]
fn thresholds_are_strict() {
    let mut p = quiet();
    p.gravity = 2.0;
    p.thermal = 3.0;
    p.pressure = 2.0;
    p.inertia = 1.5;
    p.sleep_wake = 1.5;
    let r = classify(&p);
    assert!(r.warnings.is_empty(), "boundary values must not fire");
}
