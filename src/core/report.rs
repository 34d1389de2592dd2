use crate::config::Config;
use crate::core::archetype::Archetype;
use crate::core::levels::{ExternalTier, Interpretation, Tone, TrafficLight};
use crate::core::recommend::RecommendationBand;
use crate::core::score::{DetailRow, DimensionScore};
use crate::questionnaire::TimeHorizon;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeSet;

impl TrafficLight {
    fn colored(self) -> String {
        let tag = format!("{:<6}", self.as_str().to_ascii_uppercase());
        match self {
            Self::Red => tag.red().bold().to_string(),
            Self::Yellow => tag.yellow().bold().to_string(),
            Self::Green => tag.green().bold().to_string(),
        }
    }
}

impl Tone {
    fn colored(self, text: &str) -> String {
        match self {
            Self::Warning => text.yellow().to_string(),
            Self::Info => text.blue().to_string(),
            Self::Success => text.green().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    pub time_horizon: TimeHorizon,
    pub goals: BTreeSet<String>,
    pub pain_points: BTreeSet<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionResult {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub label: String,
    pub traffic_light: TrafficLight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    pub recommendation_band: RecommendationBand,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub min_score: f64,
    pub fail_on_red: bool,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub info: AssessmentInfo,
    pub overall_score: f64,
    pub level: u8,
    pub label: String,
    pub external_tier: ExternalTier,
    pub interpretation: Interpretation,
    pub dimensions: Vec<DimensionResult>,
    pub ranking: Vec<DimensionScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub archetype: Archetype,
    pub executive_summary: String,
    pub details: Vec<DetailRow>,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub assessment: AssessmentInfo,
    pub overall_score: f64,
    pub level: u8,
    pub label: String,
    pub external_tier: ExternalTier,
    pub interpretation: Interpretation,
    pub dimensions: Vec<DimensionResult>,
    pub ranking: Vec<DimensionScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub archetype: Archetype,
    pub executive_summary: String,
    pub details: Vec<DetailRow>,
    pub config: ConfigSummary,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            assessment: report.info.clone(),
            overall_score: report.overall_score,
            level: report.level,
            label: report.label.clone(),
            external_tier: report.external_tier,
            interpretation: report.interpretation,
            dimensions: report.dimensions.clone(),
            ranking: report.ranking.clone(),
            strengths: report.strengths.clone(),
            weaknesses: report.weaknesses.clone(),
            archetype: report.archetype,
            executive_summary: report.executive_summary.clone(),
            details: report.details.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(overall: f64, dimensions: &[DimensionResult], cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if overall < cfg.general.min_score {
        reasons.push(format!(
            "overall score {:.2} is below min_score {:.2}",
            overall, cfg.general.min_score
        ));
    }

    if cfg.general.fail_on_red {
        let red: Vec<&str> = dimensions
            .iter()
            .filter(|dimension| dimension.traffic_light == TrafficLight::Red)
            .map(|dimension| dimension.name.as_str())
            .collect();
        if !red.is_empty() {
            reasons.push(format!("red dimensions: {}", red.join(", ")));
        }
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &FinalReport) {
    println!(
        "EAM Maturity: {:.2}/5 ({})",
        report.overall_score,
        report.label.bold()
    );
    println!("External reference: {}", report.external_tier);
    match &report.info.participant {
        Some(participant) => println!("Assessment: {} ({})", report.info.name, participant),
        None => println!("Assessment: {}", report.info.name),
    }

    let interpretation = report.interpretation;
    println!();
    println!("{}", interpretation.tone.colored(interpretation.text));

    println!();
    println!("{}", "DIMENSIONS".bold());
    for dimension in &report.dimensions {
        let target = match (dimension.target, dimension.gap) {
            (Some(target), Some(gap)) => format!("  target {:.2}  gap {:+.2}", target, gap),
            _ => String::new(),
        };
        println!(
            "[{}] {:<36} {:.2}  {}{}",
            dimension.traffic_light.colored(),
            dimension.name,
            dimension.score,
            dimension.label,
            target
        );
    }

    println!();
    println!("{}", "STRENGTHS".bold());
    for name in &report.strengths {
        println!("+ {}", name);
    }
    println!("{}", "DEVELOPMENT AREAS".bold());
    for name in &report.weaknesses {
        println!("- {}", name);
    }

    println!();
    println!(
        "{} {}",
        "ARCHETYPE:".bold(),
        report.archetype.name.cyan().bold()
    );
    println!("{}", report.archetype.description);

    println!();
    println!("{}", "RECOMMENDATIONS".bold());
    for dimension in &report.dimensions {
        if dimension.recommendations.is_empty() {
            continue;
        }
        println!("{}", dimension.name);
        for recommendation in &dimension.recommendations {
            println!("-> {}", recommendation);
        }
    }

    println!();
    print!("{}", report.executive_summary);

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimension(name: &str, score: f64, light: TrafficLight) -> DimensionResult {
        DimensionResult {
            id: name.to_lowercase(),
            name: name.to_string(),
            score,
            label: String::new(),
            traffic_light: light,
            target: None,
            gap: None,
            recommendation_band: RecommendationBand::for_score(score),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn default_config_never_fails() {
        let dims = [dimension("A", 1.0, TrafficLight::Red)];
        let exit = evaluate_exit(1.0, &dims, &Config::default());
        assert!(exit.ok);
        assert!(exit.reasons.is_empty());
    }

    #[test]
    fn min_score_and_red_dimensions_fail_when_configured() {
        let mut cfg = Config::default();
        cfg.general.min_score = 3.0;
        cfg.general.fail_on_red = true;

        let dims = [
            dimension("Alpha", 2.0, TrafficLight::Red),
            dimension("Beta", 3.5, TrafficLight::Green),
        ];
        let exit = evaluate_exit(2.75, &dims, &cfg);
        assert!(!exit.ok);
        assert_eq!(
            exit.reason_line(),
            "overall score 2.75 is below min_score 3.00; red dimensions: Alpha"
        );
    }

    #[test]
    fn dimension_result_serializes_lowercase_light_and_skips_missing_target() {
        let value = serde_json::to_value(dimension("Alpha", 3.0, TrafficLight::Yellow))
            .expect("serialize");
        assert_eq!(value["traffic_light"], "yellow");
        assert_eq!(value["recommendation_band"], "build_out");
        assert!(value.get("target").is_none());
        assert!(value.get("gap").is_none());
    }
}
