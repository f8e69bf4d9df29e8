mod config;
mod policy;
mod rules;
mod suggestions;

pub use config::{
    EligibilityPolicy, RiskThresholds, ScoringBands, ScoringConfig, ScoringConfigError,
    ScoringWeights,
};
pub use policy::BlockReason;
pub use suggestions::improvement_suggestions;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flat, role-independent view of a user that the scoring rules consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCalculationInput {
    pub user_id: String,
    pub id_verified: bool,
    pub face_match_verified: bool,
    pub completed_trips: u32,
    pub average_rating: f64,
    pub at_fault_claims: u32,
    pub account_age_months: f64,
    pub driver_age: u32,
}

/// Direction in which a factor moved the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorImpact {
    Positive,
    Negative,
    Neutral,
}

/// Discrete contribution to a risk score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub impact: FactorImpact,
    pub weight: f64,
    pub description: String,
}

/// Categorical bucket derived from the score. Higher scores are safer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn from_score(score: u8, thresholds: &RiskThresholds) -> Self {
        if score >= thresholds.low {
            RiskLevel::Low
        } else if score >= thresholds.medium {
            RiskLevel::Medium
        } else if score >= thresholds.high {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::VeryHigh => "Very High Risk",
        }
    }

    /// Hex display color used by the booking screens.
    pub const fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#10B981",
            RiskLevel::Medium => "#F59E0B",
            RiskLevel::High => "#F97316",
            RiskLevel::VeryHigh => "#EF4444",
        }
    }
}

pub fn risk_level_label(level: RiskLevel) -> &'static str {
    level.label()
}

pub fn risk_level_color(level: RiskLevel) -> &'static str {
    level.color()
}

/// Scoring output describing the bounded score and the decision trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub score: u8,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub can_instant_book: bool,
    pub requires_manual_approval: bool,
    pub restrictions: Vec<String>,
    pub calculated_at: DateTime<Utc>,
}

impl RiskScore {
    pub fn has_factor(&self, name: &str) -> bool {
        self.factors.iter().any(|factor| factor.name == name)
    }

    pub fn improvement_suggestions(&self) -> Vec<String> {
        improvement_suggestions(self)
    }
}

/// Final allow/block decision combining the score, hard rules, and vehicle settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingEligibility {
    pub eligible: bool,
    pub risk_score: RiskScore,
    pub can_instant_book: bool,
    pub requires_approval: bool,
    pub restrictions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
}

/// Stateless evaluator that applies the scoring configuration to an input.
#[derive(Debug, Clone, Default)]
pub struct RiskScoringEngine {
    config: ScoringConfig,
}

impl RiskScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn calculate_guest_risk_score(&self, input: &RiskCalculationInput) -> RiskScore {
        self.calculate_guest_risk_score_at(input, Utc::now())
    }

    /// Score with an explicit timestamp so repeated runs compare equal.
    pub fn calculate_guest_risk_score_at(
        &self,
        input: &RiskCalculationInput,
        calculated_at: DateTime<Utc>,
    ) -> RiskScore {
        let (factors, running_score) = rules::score_input(input, &self.config);

        let score = running_score.clamp(0.0, 100.0).round() as u8;
        let thresholds = &self.config.thresholds;
        let level = RiskLevel::from_score(score, thresholds);
        let can_instant_book = score >= thresholds.medium && input.id_verified;
        let requires_manual_approval = score < thresholds.high;
        let restrictions = policy::restrictions_for(input, requires_manual_approval, &self.config);

        RiskScore {
            score,
            level,
            factors,
            can_instant_book,
            requires_manual_approval,
            restrictions,
            calculated_at,
        }
    }

    pub fn check_booking_eligibility(
        &self,
        input: &RiskCalculationInput,
        vehicle_instant_book: bool,
    ) -> BookingEligibility {
        let risk_score = self.calculate_guest_risk_score(input);
        self.eligibility_for(input, risk_score, vehicle_instant_book)
    }

    /// Apply the hard blocks and vehicle setting to an already computed score.
    pub fn eligibility_for(
        &self,
        input: &RiskCalculationInput,
        risk_score: RiskScore,
        vehicle_instant_book: bool,
    ) -> BookingEligibility {
        let block = policy::hard_block(input, &risk_score, &self.config);
        let eligible = block.is_none();

        BookingEligibility {
            eligible,
            can_instant_book: eligible && risk_score.can_instant_book && vehicle_instant_book,
            requires_approval: eligible
                && (!risk_score.can_instant_book || !vehicle_instant_book),
            restrictions: risk_score.restrictions.clone(),
            blocked_reason: block.map(|reason| reason.message().to_string()),
            risk_score,
        }
    }
}

/// Score with the default rubric.
pub fn calculate_guest_risk_score(input: &RiskCalculationInput) -> RiskScore {
    RiskScoringEngine::default().calculate_guest_risk_score(input)
}

/// Check eligibility with the default rubric.
pub fn check_booking_eligibility(
    input: &RiskCalculationInput,
    vehicle_instant_book: bool,
) -> BookingEligibility {
    RiskScoringEngine::default().check_booking_eligibility(input, vehicle_instant_book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping_has_no_gaps_at_boundaries() {
        let thresholds = RiskThresholds::default();
        let cases = [
            (100, RiskLevel::Low),
            (80, RiskLevel::Low),
            (79, RiskLevel::Medium),
            (60, RiskLevel::Medium),
            (59, RiskLevel::High),
            (30, RiskLevel::High),
            (29, RiskLevel::VeryHigh),
            (0, RiskLevel::VeryHigh),
        ];

        for (score, expected) in cases {
            assert_eq!(RiskLevel::from_score(score, &thresholds), expected, "score {score}");
        }
    }

    #[test]
    fn labels_and_colors_cover_every_level() {
        assert_eq!(risk_level_label(RiskLevel::Low), "Low Risk");
        assert_eq!(risk_level_label(RiskLevel::VeryHigh), "Very High Risk");
        assert_eq!(risk_level_color(RiskLevel::Medium), "#F59E0B");
        assert_eq!(risk_level_color(RiskLevel::High), "#F97316");
    }

    #[test]
    fn level_serializes_as_snake_case() {
        let encoded = serde_json::to_string(&RiskLevel::VeryHigh).expect("serializes");
        assert_eq!(encoded, "\"very_high\"");
    }
}
