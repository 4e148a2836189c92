//! Heuristic risk scoring.
//!
//! Maps raw text to an ordered list of [`DangerPoint`]s. Pure and
//! deterministic: the same text always yields byte-identical output.
//!
//! # Rating
//!
//! For each category with at least one match:
//!
//! ```text
//! rating = base_rating
//!        + 1  if matches > 3
//!        + 1  if matches > 6
//!        + 1  if the text contains any intensifier term
//! clamped to 1..=10
//! ```
//!
//! The intensifier bonus looks at the whole text, not at the neighbourhood of
//! a match, so one "significant" anywhere lifts every flagged category.

use crate::analysis::result::{DangerPoint, MAX_MATCHES, MAX_RATING, MIN_RATING};
use crate::risk::category::RiskCategory;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Terms that raise every flagged category's rating by one
pub const INTENSIFIER_PATTERN: &str = "severe|serious|major|significant|substantial|considerable|extreme|maximum|total|complete|absolute";

/// Match count above which a category gains one rating point
pub const FREQUENT_MATCHES: usize = 3;

/// Match count above which a category gains a second rating point
pub const VERY_FREQUENT_MATCHES: usize = 6;

/// Only called with the built-in category and intensifier patterns.
///
/// Case-insensitive, ASCII-only folding: non-ASCII look-alikes such as the
/// Kelvin sign never match Latin letters.
fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("static pattern")
}

static CATEGORY_PATTERNS: LazyLock<Vec<(RiskCategory, Regex)>> = LazyLock::new(|| {
    RiskCategory::ALL
        .iter()
        .map(|category| (*category, compile(category.pattern())))
        .collect()
});

static INTENSIFIERS: LazyLock<Regex> = LazyLock::new(|| compile(INTENSIFIER_PATTERN));

/// Score `text` against every risk category.
///
/// Returns one danger point per category with at least one match, sorted by
/// rating (highest first). Ties keep category declaration order.
pub fn score_danger_points(text: &str) -> Vec<DangerPoint> {
    let intensified = INTENSIFIERS.is_match(text);

    let mut points: Vec<DangerPoint> = CATEGORY_PATTERNS
        .iter()
        .filter_map(|(category, pattern)| score_category(*category, pattern, text, intensified))
        .collect();

    // sort_by is stable
    points.sort_by(|a, b| b.rating().cmp(&a.rating()));
    points
}

fn score_category(
    category: RiskCategory,
    pattern: &Regex,
    text: &str,
    intensified: bool,
) -> Option<DangerPoint> {
    let mut count = 0usize;
    let mut evidence = Vec::with_capacity(MAX_MATCHES);
    for m in pattern.find_iter(text) {
        if evidence.len() < MAX_MATCHES {
            evidence.push(m.as_str().to_string());
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let rating = rate(category.base_rating(), count, intensified);
    let description = format!(
        "Found {} instances of {} terms. {}",
        count,
        category.name().to_lowercase(),
        category.tier_description(rating)
    );

    Some(DangerPoint::new(category, description, rating, evidence))
}

/// Apply frequency and intensifier bonuses to a base rating
pub fn rate(base_rating: u8, match_count: usize, intensified: bool) -> u8 {
    let mut rating = base_rating;
    if match_count > FREQUENT_MATCHES {
        rating = rating.saturating_add(1);
    }
    if match_count > VERY_FREQUENT_MATCHES {
        rating = rating.saturating_add(1);
    }
    if intensified {
        rating = rating.saturating_add(1);
    }
    rating.clamp(MIN_RATING, MAX_RATING)
}
