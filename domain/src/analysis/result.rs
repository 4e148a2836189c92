//! Analysis result types.
//!
//! - [`DangerPoint`] - one flagged risk category with its rating and evidence
//! - [`Severity`] - display class derived from a rating
//! - [`AnalysisResult`] - composite output of the analysis pipeline

use crate::risk::category::RiskCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lowest rating a danger point can carry
pub const MIN_RATING: u8 = 1;

/// Highest rating a danger point can carry
pub const MAX_RATING: u8 = 10;

/// Maximum number of matched substrings kept as evidence
pub const MAX_MATCHES: usize = 5;

/// A flagged risk category (Value Object)
///
/// Only the scoring engine creates these; there is no public constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerPoint {
    title: RiskCategory,
    description: String,
    rating: u8,
    matches: Vec<String>,
}

impl DangerPoint {
    pub(crate) fn new(
        title: RiskCategory,
        description: String,
        rating: u8,
        matches: Vec<String>,
    ) -> Self {
        Self {
            title,
            description,
            rating: rating.clamp(MIN_RATING, MAX_RATING),
            matches: matches.into_iter().take(MAX_MATCHES).collect(),
        }
    }

    pub fn title(&self) -> RiskCategory {
        self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Rating in `1..=10`
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Up to five literal matches, in text order and source casing
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn severity(&self) -> Severity {
        Severity::from_rating(self.rating)
    }
}

/// Display class for a danger rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// critical >= 8, high >= 6, medium >= 4, low otherwise
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            8.. => Severity::Critical,
            6..=7 => Severity::High,
            4..=5 => Severity::Medium,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite result of the analysis pipeline
///
/// Every field degrades independently: a failed summary becomes a
/// placeholder string, failed translations are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The text exactly as submitted
    pub original_text: String,
    /// Generated summary, or a placeholder explaining why there is none
    pub summary: String,
    /// Flagged categories, highest rating first
    pub danger_points: Vec<DangerPoint>,
    /// Language code -> translated text, successful languages only
    pub translations: BTreeMap<String, String>,
    /// When the analysis was requested
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Start an empty result for `original_text`
    pub fn new(original_text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            original_text: original_text.into(),
            summary: String::new(),
            danger_points: Vec::new(),
            translations: BTreeMap::new(),
            timestamp,
        }
    }

    /// Highest danger rating, if any category was flagged
    pub fn max_rating(&self) -> Option<u8> {
        self.danger_points.iter().map(DangerPoint::rating).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_point_clamps_rating() {
        let point = DangerPoint::new(RiskCategory::Privacy, "d".into(), 12, vec![]);
        assert_eq!(point.rating(), MAX_RATING);
        let point = DangerPoint::new(RiskCategory::Privacy, "d".into(), 0, vec![]);
        assert_eq!(point.rating(), MIN_RATING);
    }

    #[test]
    fn test_danger_point_keeps_five_matches() {
        let matches = (0..8).map(|i| format!("m{}", i)).collect();
        let point = DangerPoint::new(RiskCategory::Service, "d".into(), 5, matches);
        assert_eq!(point.matches(), &["m0", "m1", "m2", "m3", "m4"]);
    }

    #[test]
    fn test_severity_classes() {
        assert_eq!(Severity::from_rating(10), Severity::Critical);
        assert_eq!(Severity::from_rating(8), Severity::Critical);
        assert_eq!(Severity::from_rating(7), Severity::High);
        assert_eq!(Severity::from_rating(6), Severity::High);
        assert_eq!(Severity::from_rating(5), Severity::Medium);
        assert_eq!(Severity::from_rating(4), Severity::Medium);
        assert_eq!(Severity::from_rating(3), Severity::Low);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let mut result = AnalysisResult::new("text", Utc::now());
        result.summary = "sum".into();
        result.translations.insert("es".into(), "texto".into());
        result.danger_points.push(DangerPoint::new(
            RiskCategory::Financial,
            "desc".into(),
            7,
            vec!["fee".into()],
        ));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["originalText"], "text");
        assert_eq!(json["translations"]["es"], "texto");
        assert_eq!(json["dangerPoints"][0]["title"], "Financial Risk");
        assert_eq!(json["dangerPoints"][0]["rating"], 7);
        assert_eq!(json["dangerPoints"][0]["matches"][0], "fee");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_max_rating() {
        let mut result = AnalysisResult::new("text", Utc::now());
        assert_eq!(result.max_rating(), None);
        result.danger_points.push(DangerPoint::new(
            RiskCategory::Modification,
            "d".into(),
            4,
            vec![],
        ));
        result.danger_points.push(DangerPoint::new(
            RiskCategory::Privacy,
            "d".into(),
            9,
            vec![],
        ));
        assert_eq!(result.max_rating(), Some(9));
    }
}
