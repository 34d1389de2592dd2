pub mod archetype;
pub mod error;
pub mod export;
pub mod levels;
pub mod recommend;
pub mod report;
pub mod score;
pub mod summary;

use crate::answers::Answers;
use crate::config::Config;
use crate::core::archetype::ArchetypeInput;
use crate::core::error::AssessmentError;
use crate::core::recommend::RecommendationBand;
use crate::core::report::{AssessmentInfo, ConfigSummary, DimensionResult, FinalReport};
use crate::core::score::{DimensionRatings, DimensionScore};
use crate::core::summary::{RANKED_SLOTS, SummaryInput};
use crate::questionnaire::{DEFAULT_RATING, MAX_RATING, MIN_RATING, Questionnaire};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Scores one submission against the questionnaire. Either the whole report
/// is produced or the submission is rejected as incomplete.
pub fn run_assessment(
    questionnaire: &Questionnaire,
    answers: &Answers,
    cfg: &Config,
) -> Result<FinalReport, AssessmentError> {
    if questionnaire.dimensions.is_empty() {
        return Err(AssessmentError::invalid("the questionnaire has no dimensions"));
    }
    reject_unknown_dimensions(questionnaire, answers)?;

    let answered = resolve_ratings(questionnaire, answers)?;
    let mut scores = Vec::with_capacity(answered.len());
    for entry in &answered {
        let score = score::dimension_score(&entry.ratings).map_err(|_| {
            AssessmentError::invalid(format!("dimension {} has no ratings", entry.dimension.id))
        })?;
        scores.push(DimensionScore::new(entry.dimension.id, entry.dimension.name, score));
    }

    let overall = score::overall_score(&scores)?;
    let maturity = levels::classify_maturity(overall);
    debug!(
        overall,
        level = maturity.level(),
        questions = questionnaire.question_count(),
        "scored assessment"
    );

    let targets = resolve_targets(questionnaire, answers);
    let gaps = score::compute_gaps(&targets, &scores);
    let dimensions: Vec<DimensionResult> = scores
        .iter()
        .zip(gaps)
        .map(|(entry, gap)| DimensionResult {
            id: entry.id.clone(),
            name: entry.name.clone(),
            score: entry.score,
            label: levels::classify_maturity(entry.score).label().to_string(),
            traffic_light: levels::traffic_light(entry.score),
            target: gap.target,
            gap: gap.gap,
            recommendation_band: RecommendationBand::for_score(entry.score),
            recommendations: recommend::recommendations_for(&entry.name, entry.score)
                .iter()
                .map(|text| (*text).to_string())
                .collect(),
        })
        .collect();

    let ranking = score::rank_dimensions(&scores);
    let strengths = score::top_strengths(&ranking, RANKED_SLOTS)
        .into_iter()
        .map(|entry| entry.name.clone())
        .collect();
    let weaknesses = score::bottom_weaknesses(&scores, RANKED_SLOTS)
        .into_iter()
        .map(|entry| entry.name.clone())
        .collect();

    let info = resolve_info(answers, cfg);
    let archetype = archetype::determine_archetype(&ArchetypeInput {
        overall,
        scores: &scores,
        pain_points: &info.pain_points,
        goals: &info.goals,
    });
    debug!(archetype = archetype.name, "matched archetype");

    let external_tier = levels::classify_external_tier(overall);
    let executive_summary = summary::build_executive_summary(&SummaryInput {
        assessment_name: &info.name,
        participant: info.participant.as_deref(),
        overall,
        label: maturity.label(),
        external_tier,
        scores: &scores,
        goals: &info.goals,
        pain_points: &info.pain_points,
        time_horizon: info.time_horizon,
    });

    let exit = report::evaluate_exit(overall, &dimensions, cfg);

    Ok(FinalReport {
        info,
        overall_score: overall,
        level: maturity.level(),
        label: maturity.label().to_string(),
        external_tier,
        interpretation: levels::overall_interpretation(overall),
        dimensions,
        ranking,
        strengths,
        weaknesses,
        archetype,
        executive_summary,
        details: score::build_detail_rows(&answered),
        config: ConfigSummary {
            min_score: cfg.general.min_score,
            fail_on_red: cfg.general.fail_on_red,
        },
        exit,
    })
}

fn reject_unknown_dimensions(
    questionnaire: &Questionnaire,
    answers: &Answers,
) -> Result<(), AssessmentError> {
    let unknown = answers
        .ratings
        .keys()
        .chain(answers.targets.keys())
        .find(|id| questionnaire.dimension(id).is_none());

    match unknown {
        Some(id) => Err(AssessmentError::invalid(format!("unknown dimension id {id}"))),
        None => Ok(()),
    }
}

/// Ratings per dimension in questionnaire order. An unanswered dimension
/// takes the form default for every question.
fn resolve_ratings<'q>(
    questionnaire: &'q Questionnaire,
    answers: &Answers,
) -> Result<Vec<DimensionRatings<'q>>, AssessmentError> {
    let mut answered = Vec::with_capacity(questionnaire.dimensions.len());

    for dimension in &questionnaire.dimensions {
        let ratings = match answers.ratings.get(dimension.id) {
            Some(raw) => {
                if raw.len() != dimension.questions.len() {
                    return Err(AssessmentError::invalid(format!(
                        "dimension {} expects {} ratings, got {}",
                        dimension.id,
                        dimension.questions.len(),
                        raw.len()
                    )));
                }
                raw.iter()
                    .map(|&value| clamp_rating(dimension.id, value))
                    .collect()
            }
            None => {
                debug!(dimension = dimension.id, "no ratings given, using defaults");
                vec![DEFAULT_RATING; dimension.questions.len()]
            }
        };

        answered.push(DimensionRatings { dimension, ratings });
    }

    Ok(answered)
}

fn resolve_targets(questionnaire: &Questionnaire, answers: &Answers) -> BTreeMap<String, f64> {
    answers
        .targets
        .iter()
        .filter_map(|(id, &value)| {
            let dimension = questionnaire.dimension(id)?;
            Some((
                dimension.name.to_string(),
                f64::from(clamp_rating(dimension.id, value)),
            ))
        })
        .collect()
}

fn clamp_rating(dimension: &str, value: i64) -> u8 {
    let clamped = value.clamp(i64::from(MIN_RATING), i64::from(MAX_RATING));
    if clamped != value {
        warn!(dimension, value, clamped, "rating out of range, clamped");
    }
    clamped as u8
}

fn resolve_info(answers: &Answers, cfg: &Config) -> AssessmentInfo {
    let section = &answers.assessment;
    let name = section
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(&cfg.assessment.name)
        .to_string();
    let participant = section
        .participant
        .as_deref()
        .map(str::trim)
        .filter(|participant| !participant.is_empty())
        .map(str::to_string);

    AssessmentInfo {
        name,
        participant,
        time_horizon: section.time_horizon.unwrap_or(cfg.assessment.time_horizon),
        goals: section.goals.clone(),
        pain_points: section.pain_points.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::levels::TrafficLight;
    use crate::questionnaire::{
        Dimension, GOAL_TIME_TO_MARKET, PAIN_FRAGILE_CORE, QUESTIONNAIRE, TimeHorizon,
    };

    fn answers_from(toml_text: &str) -> Answers {
        toml::from_str(toml_text).expect("valid answers")
    }

    fn two_dimension_questionnaire() -> Questionnaire {
        Questionnaire {
            dimensions: vec![
                Dimension {
                    id: "a",
                    name: "A",
                    description: "",
                    questions: vec!["a1", "a2", "a3", "a4"],
                },
                Dimension {
                    id: "b",
                    name: "B",
                    description: "",
                    questions: vec!["b1", "b2", "b3", "b4"],
                },
            ],
            goals: Vec::new(),
            pain_points: Vec::new(),
        }
    }

    #[test]
    fn extreme_dimensions_average_to_defined() {
        let questionnaire = two_dimension_questionnaire();
        let answers = answers_from("[ratings]\na = [1, 1, 1, 1]\nb = [5, 5, 5, 5]\n");
        let report = run_assessment(&questionnaire, &answers, &Config::default()).expect("report");

        assert_eq!(report.dimensions[0].score, 1.0);
        assert_eq!(report.dimensions[1].score, 5.0);
        assert_eq!(report.overall_score, 3.0);
        assert_eq!(report.label, "Level 3 – Defined");
        assert_eq!(report.dimensions[0].traffic_light, TrafficLight::Red);
        assert_eq!(report.dimensions[1].traffic_light, TrafficLight::Green);
        // unknown names in the recommendation table produce nothing
        let dimensions = &report.dimensions;
        assert!(dimensions.iter().all(|d| d.recommendations.is_empty()));
    }

    #[test]
    fn single_dimension_overall_equals_dimension_score() {
        let mut questionnaire = two_dimension_questionnaire();
        questionnaire.dimensions.truncate(1);
        let answers = answers_from("[ratings]\na = [3, 3, 3, 3]\n");
        let report = run_assessment(&questionnaire, &answers, &Config::default()).expect("report");

        assert_eq!(report.overall_score, 3.0);
        assert_eq!(report.overall_score, report.dimensions[0].score);
        assert_eq!(report.strengths, vec!["A".to_string()]);
        assert_eq!(report.weaknesses, vec!["A".to_string()]);
        assert!(report.executive_summary.contains("  2. -\n"));
    }

    #[test]
    fn default_answers_score_every_dimension_at_three() {
        let cfg = Config::default();
        let report = run_assessment(&QUESTIONNAIRE, &Answers::default(), &cfg).expect("report");

        assert_eq!(report.dimensions.len(), QUESTIONNAIRE.dimensions.len());
        assert!(report.dimensions.iter().all(|d| d.score == 3.0));
        assert!(report.dimensions.iter().all(|d| d.target.is_none()));
        assert_eq!(report.details.len(), QUESTIONNAIRE.question_count());
        assert_eq!(report.info.name, "Pilot EAM Assessment");
        assert_eq!(report.info.time_horizon, TimeHorizon::TwelveMonths);
        assert_eq!(report.archetype.name, "Emerging engine");
        assert!(report.exit.ok);
    }

    #[test]
    fn clamps_out_of_range_ratings_and_targets() {
        let answers = answers_from(
            "[ratings]\nstrategy = [0, 9, 3]\n\n[targets]\nstrategy = 12\nmethods = 4\n",
        );
        let report = run_assessment(&QUESTIONNAIRE, &answers, &Config::default()).expect("report");

        let strategy = &report.dimensions[0];
        assert_eq!(strategy.score, 3.0);
        assert_eq!(strategy.target, Some(5.0));
        assert_eq!(strategy.gap, Some(2.0));
        assert_eq!(report.details[0].rating, 1);
        assert_eq!(report.details[1].rating, 5);

        let methods = &report.dimensions[1];
        assert_eq!(methods.target, Some(4.0));
        assert_eq!(methods.gap, Some(1.0));
        assert_eq!(report.dimensions[2].target, None);
    }

    #[test]
    fn rejects_wrong_rating_counts_and_unknown_ids() {
        let wrong_count = answers_from("[ratings]\nstrategy = [3, 3]\n");
        let err = run_assessment(&QUESTIONNAIRE, &wrong_count, &Config::default())
            .expect_err("wrong count");
        assert_eq!(
            err,
            AssessmentError::invalid("dimension strategy expects 3 ratings, got 2")
        );

        let empty = answers_from("[ratings]\nstrategy = []\n");
        assert!(run_assessment(&QUESTIONNAIRE, &empty, &Config::default()).is_err());

        let unknown = answers_from("[targets]\nfinance = 4\n");
        let err = run_assessment(&QUESTIONNAIRE, &unknown, &Config::default())
            .expect_err("unknown id");
        let message = err.to_string();
        assert!(message.starts_with("assessment incomplete: unknown dimension id finance"));
    }

    #[test]
    fn empty_questionnaire_is_invalid() {
        let questionnaire = Questionnaire {
            dimensions: Vec::new(),
            goals: Vec::new(),
            pain_points: Vec::new(),
        };
        assert!(matches!(
            run_assessment(&questionnaire, &Answers::default(), &Config::default()),
            Err(AssessmentError::InvalidInput(_))
        ));
    }

    #[test]
    fn fragile_core_pain_overrides_a_moderate_score() {
        let answers = answers_from(&format!(
            "[assessment]\npain_points = [\"{PAIN_FRAGILE_CORE}\"]\n\n\
             [ratings]\nstrategy = [3, 3, 2]\n"
        ));
        let report = run_assessment(&QUESTIONNAIRE, &answers, &Config::default()).expect("report");
        assert!(report.overall_score >= 2.3);
        assert_eq!(report.archetype.name, "Firefighters");
    }

    #[test]
    fn value_driven_profile_flows_into_the_summary() {
        let answers = answers_from(&format!(
            r#"
[assessment]
name = "  "
participant = "Group IT"
time_horizon = "24 months"
goals = ["{GOAL_TIME_TO_MARKET}"]

[ratings]
business_value = [4, 4, 4]
"#
        ));
        let report = run_assessment(&QUESTIONNAIRE, &answers, &Config::default()).expect("report");

        assert_eq!(report.archetype.name, "Value-driven transformer");
        assert_eq!(report.info.name, "Pilot EAM Assessment");
        assert_eq!(report.strengths[0], "Business Value & Outcomes");
        let summary = &report.executive_summary;
        assert!(summary.contains("Participant / area: Group IT"));
        assert!(summary.contains("Within the next 24 months, build on Business Value & Outcomes"));
    }

    #[test]
    fn gates_on_configured_minimum() {
        let mut cfg = Config::default();
        cfg.general.min_score = 3.5;
        let report = run_assessment(&QUESTIONNAIRE, &Answers::default(), &cfg).expect("report");
        assert!(!report.exit.ok);
        assert_eq!(report.config.min_score, 3.5);
    }
}
