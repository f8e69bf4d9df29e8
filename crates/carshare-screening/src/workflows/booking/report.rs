use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::risk::{BookingEligibility, RiskFactor, RiskLevel, RiskScore};

/// Render-ready risk summary for the booking screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRiskReport {
    pub user_id: String,
    pub score: u8,
    pub level: RiskLevel,
    pub level_label: String,
    pub level_color: String,
    pub can_instant_book: bool,
    pub requires_manual_approval: bool,
    pub factors: Vec<RiskFactor>,
    pub restrictions: Vec<String>,
    pub suggestions: Vec<String>,
    pub calculated_at: DateTime<Utc>,
}

impl GuestRiskReport {
    pub fn from_score(user_id: &str, risk_score: &RiskScore) -> Self {
        Self {
            user_id: user_id.to_string(),
            score: risk_score.score,
            level: risk_score.level,
            level_label: risk_score.level.label().to_string(),
            level_color: risk_score.level.color().to_string(),
            can_instant_book: risk_score.can_instant_book,
            requires_manual_approval: risk_score.requires_manual_approval,
            factors: risk_score.factors.clone(),
            restrictions: risk_score.restrictions.clone(),
            suggestions: risk_score.improvement_suggestions(),
            calculated_at: risk_score.calculated_at,
        }
    }
}

/// Booking decision for one guest and one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityReport {
    pub user_id: String,
    pub vehicle_id: String,
    pub eligible: bool,
    pub can_instant_book: bool,
    pub requires_approval: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
    pub restrictions: Vec<String>,
    pub risk: GuestRiskReport,
}

impl EligibilityReport {
    pub fn from_eligibility(
        user_id: &str,
        vehicle_id: &str,
        eligibility: &BookingEligibility,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            vehicle_id: vehicle_id.to_string(),
            eligible: eligibility.eligible,
            can_instant_book: eligibility.can_instant_book,
            requires_approval: eligibility.requires_approval,
            blocked_reason: eligibility.blocked_reason.clone(),
            restrictions: eligibility.restrictions.clone(),
            risk: GuestRiskReport::from_score(user_id, &eligibility.risk_score),
        }
    }

    pub fn decision_summary(&self) -> String {
        match &self.blocked_reason {
            Some(reason) => format!("blocked: {reason}"),
            None if self.can_instant_book => "instant book available".to_string(),
            None => "booking requires host approval".to_string(),
        }
    }
}
