use crate::core::error::AssessmentError;
use crate::questionnaire::Dimension;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DimensionScore {
    pub id: String,
    pub name: String,
    pub score: f64,
}

impl DimensionScore {
    pub fn new(id: impl Into<String>, name: impl Into<String>, score: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score,
        }
    }
}

/// One dimension's answered ratings, in question order.
#[derive(Debug, Clone)]
pub struct DimensionRatings<'q> {
    pub dimension: &'q Dimension,
    pub ratings: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailRow {
    pub dimension: String,
    pub question: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GapEntry {
    pub name: String,
    pub actual: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

pub fn dimension_score(ratings: &[u8]) -> Result<f64, AssessmentError> {
    if ratings.is_empty() {
        return Err(AssessmentError::invalid("a dimension has no ratings"));
    }

    let sum: u32 = ratings.iter().map(|&rating| u32::from(rating)).sum();
    Ok(f64::from(sum) / ratings.len() as f64)
}

/// Mean of the per-dimension means; every dimension weighs the same.
pub fn overall_score(scores: &[DimensionScore]) -> Result<f64, AssessmentError> {
    if scores.is_empty() {
        return Err(AssessmentError::invalid("no dimensions were scored"));
    }

    let sum: f64 = scores.iter().map(|entry| entry.score).sum();
    Ok(sum / scores.len() as f64)
}

/// Descending by score. `sort_by` is stable, so ties keep definition order.
pub fn rank_dimensions(scores: &[DimensionScore]) -> Vec<DimensionScore> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

pub fn top_strengths(ranked: &[DimensionScore], n: usize) -> Vec<&DimensionScore> {
    ranked.iter().take(n).collect()
}

/// Ascending by score, weakest first. Ties keep definition order.
pub fn bottom_weaknesses(scores: &[DimensionScore], n: usize) -> Vec<&DimensionScore> {
    let mut ascending: Vec<&DimensionScore> = scores.iter().collect();
    ascending.sort_by(|a, b| a.score.total_cmp(&b.score));
    ascending.truncate(n);
    ascending
}

/// Gap per dimension keyed by display name. A dimension without a target
/// gets no gap instead of a gap against zero.
pub fn compute_gaps(targets: &BTreeMap<String, f64>, scores: &[DimensionScore]) -> Vec<GapEntry> {
    scores
        .iter()
        .map(|entry| {
            let target = targets.get(&entry.name).copied();
            GapEntry {
                name: entry.name.clone(),
                actual: entry.score,
                target,
                gap: target.map(|target| target - entry.score),
            }
        })
        .collect()
}

pub fn build_detail_rows(answered: &[DimensionRatings<'_>]) -> Vec<DetailRow> {
    let mut rows = Vec::new();

    for entry in answered {
        for (question, rating) in entry.dimension.questions.iter().zip(&entry.ratings) {
            rows.push(DetailRow {
                dimension: entry.dimension.name.to_string(),
                question: (*question).to_string(),
                rating: *rating,
            });
        }
    }

    rows
}
