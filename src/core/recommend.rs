use crate::questionnaire::{
    BUSINESS_VALUE, DATA_AI, METHODS, ORGANIZATION, PROJECTS, STRATEGY, TOOLING,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationBand {
    Foundation,
    BuildOut,
    Scale,
}

impl RecommendationBand {
    pub fn for_score(score: f64) -> Self {
        if score < 2.0 {
            Self::Foundation
        } else if score < 3.5 {
            Self::BuildOut
        } else {
            Self::Scale
        }
    }
}

struct RecommendationEntry {
    dimension: &'static str,
    foundation: &'static [&'static str],
    build_out: &'static [&'static str],
    scale: &'static [&'static str],
}

impl RecommendationEntry {
    fn for_band(&self, band: RecommendationBand) -> &'static [&'static str] {
        match band {
            RecommendationBand::Foundation => self.foundation,
            RecommendationBand::BuildOut => self.build_out,
            RecommendationBand::Scale => self.scale,
        }
    }
}

static RECOMMENDATIONS: &[RecommendationEntry] = &[
    RecommendationEntry {
        dimension: STRATEGY,
        foundation: &[
            "Secure an executive sponsor and anchor EAM in the IT strategy.",
            "Set up a lightweight architecture board with a clear decision scope.",
        ],
        build_out: &[
            "Publish binding architecture principles and reference architectures.",
            "Link board decisions to portfolio and budget processes.",
        ],
        scale: &[
            "Steer the target architecture through measurable strategic objectives.",
            "Review governance regularly for speed and decision quality.",
        ],
    },
    RecommendationEntry {
        dimension: METHODS,
        foundation: &[
            "Agree on a minimal EAM method and a small set of core artefacts.",
            "Start a first capability map for the most important business areas.",
        ],
        build_out: &[
            "Make architecture standards mandatory in project templates.",
            "Define ownership and update cycles for every core artefact.",
        ],
        scale: &[
            "Tailor the method per delivery model (agile, product, project).",
            "Measure standards compliance and retire unused artefacts.",
        ],
    },
    RecommendationEntry {
        dimension: TOOLING,
        foundation: &[
            "Consolidate architecture data into one shared repository.",
            "Name data owners for applications, interfaces, and capabilities.",
        ],
        build_out: &[
            "Automate imports from CMDB and portfolio tools.",
            "Introduce data-quality checks on mandatory repository attributes.",
        ],
        scale: &[
            "Expose repository data through APIs and self-service reports.",
            "Use the repository as the single source for lifecycle decisions.",
        ],
    },
    RecommendationEntry {
        dimension: PROJECTS,
        foundation: &[
            "Introduce one mandatory architecture checkpoint for large projects.",
            "Give solution architects templates built on EAM artefacts.",
        ],
        build_out: &[
            "Embed architecture reviews into the project and change lifecycle.",
            "Track architecture debt raised in reviews until it is resolved.",
        ],
        scale: &[
            "Shift reviews left into continuous, lightweight design guidance.",
            "Feed project learnings back into standards and reference architectures.",
        ],
    },
    RecommendationEntry {
        dimension: DATA_AI,
        foundation: &[
            "Build first standard reports from repository data.",
            "Raise data quality in the repository before automating analyses.",
        ],
        build_out: &[
            "Run impact and dependency analyses on the repository.",
            "Pilot AI support for clustering, classification, or suggestions.",
        ],
        scale: &[
            "Operationalize AI-supported analyses in planning cycles.",
            "Combine architecture data with cost, risk, and usage data.",
        ],
    },
    RecommendationEntry {
        dimension: ORGANIZATION,
        foundation: &[
            "Define EAM roles and responsibilities and communicate them.",
            "Secure a minimum of dedicated EAM capacity.",
        ],
        build_out: &[
            "Set up a community of practice for architects.",
            "Offer training on EAM benefits and principles for key stakeholders.",
        ],
        scale: &[
            "Develop architecture career paths and a skills framework.",
            "Position EAM as an advisory partner to the business.",
        ],
    },
    RecommendationEntry {
        dimension: BUSINESS_VALUE,
        foundation: &[
            "Document two or three concrete EAM success stories.",
            "Map EAM activities to business capabilities and goals.",
        ],
        build_out: &[
            "Agree on a small KPI set for EAM value (e.g. time-to-decision, reuse).",
            "Report EAM value to business stakeholders on a regular cadence.",
        ],
        scale: &[
            "Steer the EAM portfolio by measured business outcomes.",
            "Use value metrics to prioritize transformation initiatives.",
        ],
    },
];

/// Static recommendation text for a dimension display name. Unknown names
/// yield an empty slice.
pub fn recommendations_for(dimension: &str, score: f64) -> &'static [&'static str] {
    let band = RecommendationBand::for_score(score);
    RECOMMENDATIONS
        .iter()
        .find(|entry| entry.dimension == dimension)
        .map(|entry| entry.for_band(band))
        .unwrap_or(&[])
}
