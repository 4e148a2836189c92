//! Risk category reference table.
//!
//! Eight fixed categories, each with a case-insensitive term pattern, a base
//! rating and three description tiers. The table is a fixed reference
//! configuration: patterns are plain alternations without word boundaries,
//! so `fine` also matches inside `define` and `auto` inside `automatic`.
//! Changing any entry changes scoring output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating at or above which the critical description tier is used
pub const CRITICAL_TIER_MIN: u8 = 8;

/// Rating at or above which the moderate description tier is used
pub const MODERATE_TIER_MIN: u8 = 6;

/// A risk category flagged by the scoring engine.
///
/// Declaration order is the evaluation order, and therefore the tie-break
/// order among danger points with equal ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Financial Risk")]
    Financial,
    #[serde(rename = "Privacy Risk")]
    Privacy,
    #[serde(rename = "Service Risk")]
    Service,
    #[serde(rename = "Restriction Risk")]
    Restriction,
    #[serde(rename = "Subscription Risk")]
    Subscription,
    #[serde(rename = "Legal Protection")]
    LegalProtection,
    #[serde(rename = "Legal Process")]
    LegalProcess,
    #[serde(rename = "Modification Risk")]
    Modification,
}

impl RiskCategory {
    /// All categories in evaluation order
    pub const ALL: [RiskCategory; 8] = [
        RiskCategory::Financial,
        RiskCategory::Privacy,
        RiskCategory::Service,
        RiskCategory::Restriction,
        RiskCategory::Subscription,
        RiskCategory::LegalProtection,
        RiskCategory::LegalProcess,
        RiskCategory::Modification,
    ];

    /// Display name, used as the danger point title
    pub fn name(&self) -> &'static str {
        match self {
            RiskCategory::Financial => "Financial Risk",
            RiskCategory::Privacy => "Privacy Risk",
            RiskCategory::Service => "Service Risk",
            RiskCategory::Restriction => "Restriction Risk",
            RiskCategory::Subscription => "Subscription Risk",
            RiskCategory::LegalProtection => "Legal Protection",
            RiskCategory::LegalProcess => "Legal Process",
            RiskCategory::Modification => "Modification Risk",
        }
    }

    /// Rating before frequency and intensifier adjustments
    pub fn base_rating(&self) -> u8 {
        match self {
            RiskCategory::Financial => 7,
            RiskCategory::Privacy => 8,
            RiskCategory::Service => 5,
            RiskCategory::Restriction => 6,
            RiskCategory::Subscription => 7,
            RiskCategory::LegalProtection => 9,
            RiskCategory::LegalProcess => 8,
            RiskCategory::Modification => 4,
        }
    }

    /// Term alternation matched case-insensitively against the input text
    pub fn pattern(&self) -> &'static str {
        match self {
            RiskCategory::Financial => {
                "liability|damages|compensation|penalty|fine|fee|charge|cost|expense|payment|refund|cancellation|termination|breach|violation|default|forfeit"
            }
            RiskCategory::Privacy => {
                "privacy|personal data|information|collect|store|share|sell|disclose|access|monitor|track|surveillance"
            }
            RiskCategory::Service => {
                "warranty|guarantee|support|service|maintenance|repair|replacement|defect|fault|error|bug|issue"
            }
            RiskCategory::Restriction => {
                "exclusive|sole|only|restrict|limit|prohibit|forbid|ban|block|prevent|stop"
            }
            RiskCategory::Subscription => {
                "automatic|auto|renew|subscription|recurring|monthly|annual|yearly|billing|charge|debit|credit"
            }
            RiskCategory::LegalProtection => {
                "disclaimer|limitation|exclusion|exempt|immune|protected|shielded|indemnified"
            }
            RiskCategory::LegalProcess => {
                "arbitration|mediation|court|lawsuit|litigation|dispute|conflict|resolution"
            }
            RiskCategory::Modification => "modify|change|alter|update|revise|amend|edit|adjust",
        }
    }

    /// Tier description for a final rating
    pub fn tier_description(&self, rating: u8) -> &'static str {
        let [critical, moderate, low] = self.tiers();
        if rating >= CRITICAL_TIER_MIN {
            critical
        } else if rating >= MODERATE_TIER_MIN {
            moderate
        } else {
            low
        }
    }

    fn tiers(&self) -> [&'static str; 3] {
        match self {
            RiskCategory::Financial => [
                "High financial liability risk - potential for significant monetary loss",
                "Moderate financial risk - possible fees or penalties",
                "Low financial risk - standard terms",
            ],
            RiskCategory::Privacy => [
                "Critical privacy concern - extensive data collection and sharing",
                "Significant privacy risk - personal data may be collected",
                "Low privacy risk - minimal data collection",
            ],
            RiskCategory::Service => [
                "High service risk - limited support and guarantees",
                "Moderate service risk - standard support terms",
                "Low service risk - good support terms",
            ],
            RiskCategory::Restriction => [
                "Severe restrictions - very limited usage rights",
                "Moderate restrictions - some usage limitations",
                "Low restrictions - reasonable usage terms",
            ],
            RiskCategory::Subscription => [
                "High subscription risk - automatic renewals and charges",
                "Moderate subscription risk - recurring billing",
                "Low subscription risk - clear billing terms",
            ],
            RiskCategory::LegalProtection => [
                "Extreme legal protection for provider - very limited user rights",
                "Strong legal protection - limited user recourse",
                "Standard legal protection",
            ],
            RiskCategory::LegalProcess => [
                "Complex legal process - arbitration required, limited court access",
                "Moderate legal process - some dispute resolution options",
                "Standard legal process",
            ],
            RiskCategory::Modification => [
                "High modification risk - terms can change significantly",
                "Moderate modification risk - some terms may change",
                "Low modification risk - stable terms",
            ],
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
