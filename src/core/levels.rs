//! Score ladders. Each ladder owns its thresholds and wording; they are
//! edited independently even where the bands happen to coincide.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaturityLevel {
    AdHoc,
    Repeatable,
    Defined,
    Managed,
    Optimized,
}

const MATURITY_LADDER: [(f64, MaturityLevel); 4] = [
    (1.5, MaturityLevel::AdHoc),
    (2.5, MaturityLevel::Repeatable),
    (3.5, MaturityLevel::Defined),
    (4.5, MaturityLevel::Managed),
];

impl MaturityLevel {
    pub fn level(self) -> u8 {
        match self {
            Self::AdHoc => 1,
            Self::Repeatable => 2,
            Self::Defined => 3,
            Self::Managed => 4,
            Self::Optimized => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AdHoc => "Level 1 – Ad-hoc",
            Self::Repeatable => "Level 2 – Repeatable",
            Self::Defined => "Level 3 – Defined",
            Self::Managed => "Level 4 – Managed/Measured",
            Self::Optimized => "Level 5 – Optimized",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Upper bounds are exclusive: 1.5 is already level 2.
pub fn classify_maturity(score: f64) -> MaturityLevel {
    MATURITY_LADDER
        .iter()
        .find(|(upper, _)| score < *upper)
        .map_or(MaturityLevel::Optimized, |(_, level)| *level)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExternalTier {
    pub tier: u8,
    pub description: &'static str,
}

impl fmt::Display for ExternalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {} – {}", self.tier, self.description)
    }
}

const EXTERNAL_TIER_LADDER: [(f64, ExternalTier); 4] = [
    (
        1.5,
        ExternalTier {
            tier: 1,
            description: "Initial: unpredictable, reactive, dependent on individuals",
        },
    ),
    (
        2.5,
        ExternalTier {
            tier: 2,
            description: "Managed: planned and tracked per project",
        },
    ),
    (
        3.5,
        ExternalTier {
            tier: 3,
            description: "Defined: organization-wide standards and processes",
        },
    ),
    (
        4.5,
        ExternalTier {
            tier: 4,
            description: "Quantitatively managed: measured and statistically controlled",
        },
    ),
];

const EXTERNAL_TIER_TOP: ExternalTier = ExternalTier {
    tier: 5,
    description: "Optimizing: continuous, data-driven improvement",
};

/// Approximate position on a CMMI-style capability scale.
pub fn classify_external_tier(score: f64) -> ExternalTier {
    EXTERNAL_TIER_LADDER
        .iter()
        .find(|(upper, _)| score < *upper)
        .map_or(EXTERNAL_TIER_TOP, |(_, tier)| *tier)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLight {
    Red,
    Yellow,
    Green,
}

impl TrafficLight {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

pub fn traffic_light(score: f64) -> TrafficLight {
    if score < 2.5 {
        TrafficLight::Red
    } else if score < 3.5 {
        TrafficLight::Yellow
    } else {
        TrafficLight::Green
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Interpretation {
    pub tone: Tone,
    pub text: &'static str,
}

/// Narrative "next steps" paragraph for the overall score.
pub fn overall_interpretation(score: f64) -> Interpretation {
    if score < 2.0 {
        Interpretation {
            tone: Tone::Warning,
            text: "Your EAM is at a very early maturity stage. Focus on the basics: establish \
                   roles, governance, first artefacts, and a lightweight operating model.",
        }
    } else if score < 3.0 {
        Interpretation {
            tone: Tone::Info,
            text: "Your EAM is under construction. First structures exist, with plenty of room \
                   to strengthen binding processes, tooling, and governance.",
        }
    } else if score < 4.0 {
        Interpretation {
            tone: Tone::Success,
            text: "Your EAM is on a solid footing. Next steps are stronger measurability, \
                   integration into decision processes, and more automation and AI.",
        }
    } else {
        Interpretation {
            tone: Tone::Success,
            text: "Very high maturity. Focus on continuous improvement, data-driven steering, \
                   and scaling the benefit, for example through AI-supported analyses.",
        }
    }
}
