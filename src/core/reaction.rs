//! core/reaction.rs: threshold rules mapping parameters to visual reactions.
//!
//! Optional policy module: the pipeline runs with or without it. Rules are
//! evaluated in table order; every firing rule appends its warning, while the
//! color and curl multiplier keep only the last firing rule's values.

use crate::core::params::ControlParams;

/// Categorical display color chosen by the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReactionColor {
    #[default]
    Baseline,
    Red,
    Yellow,
    Purple,
    Green,
    Pink,
}

/// Result of one classification pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Reaction {
    pub color: ReactionColor,
    pub curl_multiplier: f32,
    pub warnings: Vec<&'static str>,
}

impl Reaction {
    /// The no-rule-fired state.
    pub fn neutral() -> Self {
        Self {
            color: ReactionColor::Baseline,
            curl_multiplier: 1.0,
            warnings: Vec::new(),
        }
    }
}

impl Default for Reaction {
    fn default() -> Self {
        Self::neutral()
    }
}

struct Rule {
    value: fn(&ControlParams) -> f32,
    threshold: f32,
    color: ReactionColor,
    /// None leaves the multiplier from earlier rules in place.
    multiplier: Option<f32>,
    warning: &'static str,
}

const RULES: [Rule; 5] = [
    Rule {
        value: |p| p.gravity,
        threshold: 2.0,
        color: ReactionColor::Red,
        multiplier: Some(2.0),
        warning: "too much G-forces",
    },
    Rule {
        value: |p| p.thermal,
        threshold: 3.0,
        color: ReactionColor::Yellow,
        multiplier: Some(1.5),
        warning: "thermal overload",
    },
    Rule {
        value: |p| p.pressure,
        threshold: 2.0,
        color: ReactionColor::Purple,
        multiplier: Some(1.2),
        warning: "high pressure",
    },
    Rule {
        value: |p| p.inertia,
        threshold: 1.5,
        color: ReactionColor::Green,
        multiplier: None,
        warning: "inertia whip",
    },
    Rule {
        value: |p| p.sleep_wake,
        threshold: 1.5,
        color: ReactionColor::Pink,
        multiplier: None,
        warning: "sleep/wake chaos",
    },
];

/// Evaluate the rule table against a parameter snapshot.
pub fn classify(params: &ControlParams) -> Reaction {
    let mut reaction = Reaction::neutral();
    for rule in &RULES {
        if (rule.value)(params) > rule.threshold {
            reaction.color = rule.color;
            if let Some(mult) = rule.multiplier {
                reaction.curl_multiplier = mult;
            }
            reaction.warnings.push(rule.warning);
        }
    }
    reaction
}
