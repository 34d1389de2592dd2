use crate::core::levels::ExternalTier;
use crate::core::score::{DimensionScore, bottom_weaknesses, rank_dimensions, top_strengths};
use crate::questionnaire::TimeHorizon;
use std::collections::BTreeSet;

pub const RANKED_SLOTS: usize = 3;
const EMPTY_SLOT: &str = "-";

pub struct SummaryInput<'a> {
    pub assessment_name: &'a str,
    pub participant: Option<&'a str>,
    pub overall: f64,
    pub label: &'a str,
    pub external_tier: ExternalTier,
    pub scores: &'a [DimensionScore],
    pub goals: &'a BTreeSet<String>,
    pub pain_points: &'a BTreeSet<String>,
    pub time_horizon: TimeHorizon,
}

/// Fills the fixed executive-summary template. Ranked sections always have
/// three slots; missing ones print as "-".
pub fn build_executive_summary(input: &SummaryInput<'_>) -> String {
    let ranked = rank_dimensions(input.scores);
    let strengths = slot_names(&top_strengths(&ranked, RANKED_SLOTS));
    let weaknesses = slot_names(&bottom_weaknesses(input.scores, RANKED_SLOTS));

    let mut out = format!("EXECUTIVE SUMMARY – {}\n", input.assessment_name);
    if let Some(participant) = input.participant {
        out.push_str(&format!("Participant / area: {participant}\n"));
    }

    out.push_str("\n1. Current position\n");
    out.push_str(&format!(
        "The overall EAM maturity is {:.2} out of 5, which corresponds to {}.\n",
        input.overall, input.label
    ));
    out.push_str(&format!(
        "On the external reference scale this is approximately {}.\n",
        input.external_tier
    ));

    out.push_str("\n2. Strengths\n");
    push_slots(&mut out, &strengths);

    out.push_str("\n3. Development areas\n");
    push_slots(&mut out, &weaknesses);

    out.push_str("\n4. Context\n");
    out.push_str(&format!("Goals: {}\n", join_or_none(input.goals)));
    out.push_str(&format!("Pain points: {}\n", join_or_none(input.pain_points)));
    out.push_str(&format!("Time horizon: {}\n", input.time_horizon));

    let strongest = &strengths[0];
    let [weakest, second, third] = &weaknesses;
    out.push_str("\n5. Recommended direction\n");
    out.push_str(&format!(
        "Within the next {}, build on {} and close the gap in {}, {} and {}.\n",
        input.time_horizon, strongest, weakest, second, third
    ));

    out
}

fn slot_names(entries: &[&DimensionScore]) -> [String; RANKED_SLOTS] {
    std::array::from_fn(|idx| {
        entries
            .get(idx)
            .map_or_else(|| EMPTY_SLOT.to_string(), |entry| entry.name.clone())
    })
}

fn push_slots(out: &mut String, names: &[String]) {
    for (idx, name) in names.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", idx + 1, name));
    }
}

fn join_or_none(tags: &BTreeSet<String>) -> String {
    if tags.is_empty() {
        "none selected".to_string()
    } else {
        tags.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::levels::classify_external_tier;

    fn summary_for(scores: &[DimensionScore], goals: &[&str]) -> String {
        let goals: BTreeSet<String> = goals.iter().map(|goal| goal.to_string()).collect();
        let pains = BTreeSet::new();
        build_executive_summary(&SummaryInput {
            assessment_name: "Pilot EAM Assessment",
            participant: Some("Group IT"),
            overall: 3.0,
            label: "Level 3 – Defined",
            external_tier: classify_external_tier(3.0),
            scores,
            goals: &goals,
            pain_points: &pains,
            time_horizon: TimeHorizon::TwelveMonths,
        })
    }

    #[test]
    fn substitutes_values_and_ranked_names() {
        let scores = vec![
            DimensionScore::new("a", "Alpha", 2.0),
            DimensionScore::new("b", "Beta", 4.5),
            DimensionScore::new("c", "Gamma", 3.0),
            DimensionScore::new("d", "Delta", 1.5),
        ];
        let text = summary_for(&scores, &["time-to-market"]);

        assert!(text.contains("EXECUTIVE SUMMARY – Pilot EAM Assessment"));
        assert!(text.contains("Participant / area: Group IT"));
        assert!(text.contains("3.00 out of 5, which corresponds to Level 3 – Defined"));
        assert!(text.contains("Tier 3"));
        assert!(text.contains("2. Strengths\n  1. Beta\n  2. Gamma\n  3. Alpha\n"));
        assert!(text.contains("3. Development areas\n  1. Delta\n  2. Alpha\n  3. Gamma\n"));
        assert!(text.contains("Goals: time-to-market"));
        assert!(text.contains("Pain points: none selected"));
        assert!(text.contains("Time horizon: 12 months"));
        assert!(text.contains("build on Beta and close the gap in Delta, Alpha and Gamma."));
    }

    #[test]
    fn tied_development_areas_follow_definition_order() {
        let scores = vec![
            DimensionScore::new("a", "Alpha", 3.0),
            DimensionScore::new("b", "Beta", 2.0),
            DimensionScore::new("c", "Gamma", 2.0),
            DimensionScore::new("d", "Delta", 4.0),
        ];
        let text = summary_for(&scores, &[]);
        assert!(text.contains("3. Development areas\n  1. Beta\n  2. Gamma\n  3. Alpha\n"));
        assert!(text.contains("close the gap in Beta, Gamma and Alpha."));
    }

    #[test]
    fn pads_missing_slots_with_placeholder() {
        let scores = vec![DimensionScore::new("a", "Alpha", 3.0)];
        let text = summary_for(&scores, &[]);
        assert!(text.contains("2. Strengths\n  1. Alpha\n  2. -\n  3. -\n"));
        assert!(text.contains("close the gap in Alpha, - and -."));

        let text = summary_for(&[], &[]);
        assert!(text.contains("build on - and close the gap in -, - and -."));
    }
}
