use crate::core::score::DimensionScore;
use crate::questionnaire::{
    BUSINESS_VALUE, DATA_AI, GOAL_TIME_TO_MARKET, METHODS, PAIN_FRAGILE_CORE, PROJECTS, STRATEGY,
    TOOLING,
};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct ArchetypeInput<'a> {
    pub overall: f64,
    pub scores: &'a [DimensionScore],
    pub pain_points: &'a BTreeSet<String>,
    pub goals: &'a BTreeSet<String>,
}

impl ArchetypeInput<'_> {
    /// Missing dimensions read as 0 so rules never fail on a reduced questionnaire.
    fn score_of(&self, dimension: &str) -> f64 {
        self.scores
            .iter()
            .find(|entry| entry.name == dimension)
            .map_or(0.0, |entry| entry.score)
    }

    fn has_pain(&self, tag: &str) -> bool {
        has_tag(self.pain_points, tag)
    }

    fn has_goal(&self, tag: &str) -> bool {
        has_tag(self.goals, tag)
    }
}

fn has_tag(tags: &BTreeSet<String>, tag: &str) -> bool {
    tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag))
}

struct ArchetypeRule {
    matches: fn(&ArchetypeInput<'_>) -> bool,
    archetype: Archetype,
}

fn is_firefighting(input: &ArchetypeInput<'_>) -> bool {
    input.overall < 2.3 || input.has_pain(PAIN_FRAGILE_CORE)
}

fn is_method_without_adoption(input: &ArchetypeInput<'_>) -> bool {
    input.score_of(METHODS) >= 3.2 && input.score_of(PROJECTS) < 3.0
}

fn is_data_without_mandate(input: &ArchetypeInput<'_>) -> bool {
    input.score_of(TOOLING) >= 3.2 && input.score_of(STRATEGY) < 3.0
}

fn is_value_driven(input: &ArchetypeInput<'_>) -> bool {
    input.score_of(BUSINESS_VALUE) >= 3.5 && input.has_goal(GOAL_TIME_TO_MARKET)
}

fn is_data_ai_ahead(input: &ArchetypeInput<'_>) -> bool {
    input.score_of(DATA_AI) - input.overall >= 0.5
}

// Evaluated top to bottom; the first match wins.
static ARCHETYPE_RULES: [ArchetypeRule; 5] = [
    ArchetypeRule {
        matches: is_firefighting,
        archetype: Archetype {
            name: "Firefighters",
            description: "EAM is mostly busy stabilizing a fragile landscape. Architecture work \
                          is reactive and driven by incidents rather than strategy.",
        },
    },
    ArchetypeRule {
        matches: is_method_without_adoption,
        archetype: Archetype {
            name: "Strong methodology, weak adoption",
            description: "Methods and standards are well defined, but projects rarely use them. \
                          The lever is integration into delivery, not more method.",
        },
    },
    ArchetypeRule {
        matches: is_data_without_mandate,
        archetype: Archetype {
            name: "Data-rich, low mandate",
            description: "The repository holds good architecture data, but governance lacks the \
                          mandate to turn it into binding decisions.",
        },
    },
    ArchetypeRule {
        matches: is_value_driven,
        archetype: Archetype {
            name: "Value-driven transformer",
            description: "EAM demonstrably contributes to business outcomes and is positioned to \
                          accelerate time-to-market.",
        },
    },
    ArchetypeRule {
        matches: is_data_ai_ahead,
        archetype: Archetype {
            name: "Data & AI ready, under-leveraged",
            description: "Data and AI capabilities are ahead of the rest of the practice. Their \
                          potential is not yet used in planning and decisions.",
        },
    },
];

const DEFAULT_ARCHETYPE: Archetype = Archetype {
    name: "Emerging engine",
    description: "The foundations are in place and growing evenly. Consolidate what works and \
                  pick a few focus areas to build momentum.",
};

pub fn determine_archetype(input: &ArchetypeInput<'_>) -> Archetype {
    ARCHETYPE_RULES
        .iter()
        .find(|rule| (rule.matches)(input))
        .map_or(DEFAULT_ARCHETYPE, |rule| rule.archetype)
}
