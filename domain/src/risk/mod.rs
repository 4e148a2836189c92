//! Heuristic risk assessment
//!
//! [`RiskCategory`] is the fixed reference table; [`score_danger_points`]
//! turns text into rated [`DangerPoint`](crate::DangerPoint)s.

pub mod category;
pub mod scoring;

pub use category::RiskCategory;
pub use scoring::{INTENSIFIER_PATTERN, rate, score_danger_points};
