use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STRATEGY: &str = "Strategy & Governance";
pub const METHODS: &str = "Methods & Standards";
pub const TOOLING: &str = "Tooling & Repository";
pub const PROJECTS: &str = "EAM in Projects & Solution Design";
pub const DATA_AI: &str = "Data & AI in EAM";
pub const ORGANIZATION: &str = "Organization & Skills";
pub const BUSINESS_VALUE: &str = "Business Value & Outcomes";

pub const PAIN_FRAGILE_CORE: &str = "fragile core-platform landscape";
pub const GOAL_TIME_TO_MARKET: &str = "time-to-market";

/// Default slider position for an unanswered statement.
pub const DEFAULT_RATING: u8 = 3;
/// Default target offered by the answers template.
pub const DEFAULT_TARGET: u8 = 4;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone)]
pub struct Dimension {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub questions: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Questionnaire {
    pub dimensions: Vec<Dimension>,
    pub goals: Vec<&'static str>,
    pub pain_points: Vec<&'static str>,
}

impl Questionnaire {
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| dimension.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.dimensions
            .iter()
            .map(|dimension| dimension.questions.len())
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeHorizon {
    #[serde(rename = "6 months")]
    SixMonths,
    #[default]
    #[serde(rename = "12 months")]
    TwelveMonths,
    #[serde(rename = "24 months")]
    TwentyFourMonths,
}

impl TimeHorizon {
    pub const ALL: [Self; 3] = [Self::SixMonths, Self::TwelveMonths, Self::TwentyFourMonths];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SixMonths => "6 months",
            Self::TwelveMonths => "12 months",
            Self::TwentyFourMonths => "24 months",
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub static QUESTIONNAIRE: Lazy<Questionnaire> = Lazy::new(|| Questionnaire {
    dimensions: vec![
        Dimension {
            id: "strategy",
            name: STRATEGY,
            description: "How firmly EAM is anchored in strategy and decision-making.",
            questions: vec![
                "EAM is clearly anchored in the corporate strategy.",
                "Binding guidelines and reference architectures exist.",
                "Architecture decisions are actively steered (boards, committees).",
            ],
        },
        Dimension {
            id: "methods",
            name: METHODS,
            description: "Documented method, standards, and the quality of EAM artefacts.",
            questions: vec![
                "A documented EAM process model exists.",
                "Architecture standards are applied bindingly in projects.",
                "EAM artefacts (e.g. capability maps) are consistent and current.",
            ],
        },
        Dimension {
            id: "tooling",
            name: TOOLING,
            description: "Central repository, data ownership, and tool integration.",
            questions: vec![
                "A central architecture repository (e.g. an EA tool) exists.",
                "Architecture data is actively maintained (owners, processes).",
                "Interfaces to CMDB, portfolio, and project tools exist.",
            ],
        },
        Dimension {
            id: "projects",
            name: PROJECTS,
            description: "How far EAM reaches into projects and solution design.",
            questions: vec![
                "Solution architects use EAM artefacts in projects.",
                "Binding architecture reviews and checkpoints exist.",
                "EAM is integrated into project and change processes.",
            ],
        },
        Dimension {
            id: "data_ai",
            name: DATA_AI,
            description: "Use of architecture data for analytics and AI support.",
            questions: vec![
                "Architecture data is used for analyses and reports.",
                "First AI support exists (e.g. analysis, suggestions, clustering).",
                "Repository data quality is sufficient for analyses.",
            ],
        },
        Dimension {
            id: "organization",
            name: ORGANIZATION,
            description: "Roles, capacity, and awareness of EAM in the organization.",
            questions: vec![
                "Roles and responsibilities for EAM are clearly defined.",
                "EAM has sufficient capacity and budget.",
                "Employees know the benefits and principles of EAM.",
            ],
        },
        Dimension {
            id: "business_value",
            name: BUSINESS_VALUE,
            description: "Measurable contribution of EAM to business outcomes.",
            questions: vec![
                "EAM contributions are linked to business capabilities and outcomes.",
                "The value of EAM is measured with agreed KPIs.",
                "Business stakeholders actively request EAM input.",
            ],
        },
    ],
    goals: vec![
        GOAL_TIME_TO_MARKET,
        "cost transparency",
        "risk & compliance",
        "platform consolidation",
        "data & AI enablement",
    ],
    pain_points: vec![
        PAIN_FRAGILE_CORE,
        "shadow IT",
        "unclear ownership",
        "slow project approvals",
        "outdated architecture data",
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dimension_ids_and_names_are_unique() {
        let ids: HashSet<&str> = QUESTIONNAIRE.dimensions.iter().map(|d| d.id).collect();
        let names: HashSet<&str> = QUESTIONNAIRE.dimensions.iter().map(|d| d.name).collect();
        assert_eq!(ids.len(), QUESTIONNAIRE.dimensions.len());
        assert_eq!(names.len(), QUESTIONNAIRE.dimensions.len());
    }

    #[test]
    fn every_dimension_has_questions() {
        let dimensions = &QUESTIONNAIRE.dimensions;
        assert!(dimensions.iter().all(|d| !d.questions.is_empty()));
        assert_eq!(QUESTIONNAIRE.question_count(), 21);
    }

    #[test]
    fn looks_up_dimension_by_id() {
        let dimension = QUESTIONNAIRE.dimension("data_ai").expect("data_ai");
        assert_eq!(dimension.name, DATA_AI);
        assert!(QUESTIONNAIRE.dimension("unknown").is_none());
    }

    #[test]
    fn time_horizon_parses_from_display_strings() {
        #[derive(Deserialize)]
        struct Wrapper {
            horizon: TimeHorizon,
        }
        let parsed: Wrapper = toml::from_str("horizon = \"24 months\"").expect("parse horizon");
        assert_eq!(parsed.horizon, TimeHorizon::TwentyFourMonths);
        assert_eq!(TimeHorizon::default().to_string(), "12 months");
    }
}
