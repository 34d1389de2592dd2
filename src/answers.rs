use crate::config::Config;
use crate::questionnaire::{DEFAULT_RATING, DEFAULT_TARGET, Questionnaire, TimeHorizon};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// One questionnaire submission. Ratings and targets are keyed by dimension
/// id and kept as wide integers so out-of-range input can be clamped later.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Answers {
    pub assessment: AssessmentAnswers,
    pub ratings: BTreeMap<String, Vec<i64>>,
    pub targets: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentAnswers {
    pub name: Option<String>,
    pub participant: Option<String>,
    pub time_horizon: Option<TimeHorizon>,
    pub goals: BTreeSet<String>,
    pub pain_points: BTreeSet<String>,
}

pub fn load_answers(path: &Path) -> Result<Answers> {
    if !path.is_file() {
        bail!("answers file not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading answers file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed parsing answers file {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("failed parsing answers file {}", path.display()))
    }
}

pub fn write_template(path: &Path, questionnaire: &Questionnaire, cfg: &Config) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing answers file: {}",
            path.display()
        );
    }

    fs::write(path, render_template(questionnaire, cfg))
        .with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

/// A fully answered form at the default slider positions, with every
/// statement listed as a comment above its rating row.
pub fn render_template(questionnaire: &Questionnaire, cfg: &Config) -> String {
    let mut out = String::new();
    out.push_str("# EAM maturity self-assessment\n");
    out.push_str("# Rate each statement from 1 (does not apply at all) to 5 (fully applies).\n\n");

    out.push_str("[assessment]\n");
    out.push_str(&format!("name = {}\n", quoted(&cfg.assessment.name)));
    out.push_str("participant = \"\"\n");
    out.push_str(&format!(
        "# one of: {}\n",
        quoted_list(TimeHorizon::ALL.iter().map(|horizon| horizon.as_str()))
    ));
    out.push_str(&format!(
        "time_horizon = {}\n",
        quoted(cfg.assessment.time_horizon.as_str())
    ));
    out.push_str(&format!(
        "# offered goals: {}\n",
        quoted_list(questionnaire.goals.iter().copied())
    ));
    out.push_str("goals = []\n");
    out.push_str(&format!(
        "# offered pain points: {}\n",
        quoted_list(questionnaire.pain_points.iter().copied())
    ));
    out.push_str("pain_points = []\n\n");

    out.push_str("[ratings]\n");
    for dimension in &questionnaire.dimensions {
        out.push_str(&format!("# {}: {}\n", dimension.name, dimension.description));
        for (idx, question) in dimension.questions.iter().enumerate() {
            out.push_str(&format!("#   {}. {}\n", idx + 1, question));
        }
        let defaults = vec![DEFAULT_RATING.to_string(); dimension.questions.len()];
        out.push_str(&format!("{} = [{}]\n\n", dimension.id, defaults.join(", ")));
    }

    out.push_str("[targets]\n");
    out.push_str("# desired score per dimension (1-5); remove a line to set no target\n");
    for dimension in &questionnaire.dimensions {
        out.push_str(&format!("{} = {}\n", dimension.id, DEFAULT_TARGET));
    }

    out
}

fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn quoted_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.map(quoted).collect::<Vec<_>>().join(", ")
}
