use super::rules::{AT_FAULT_CLAIMS, BELOW_AVERAGE_RATING, FULL_ID_VERIFICATION};
use super::RiskScore;

pub(crate) const VERIFY_IDENTITY: &str =
    "Complete ID and face verification to unlock instant booking";
pub(crate) const COMPLETE_TRIPS: &str = "Complete your first trips to build a rental history";
pub(crate) const MAINTAIN_RATINGS: &str =
    "Maintain good ratings by returning vehicles clean and on time";
pub(crate) const DRIVE_SAFELY: &str = "Drive safely to avoid at-fault claims on future trips";

/// Suggestions derived from which factors fired, in fixed check order.
pub fn improvement_suggestions(risk_score: &RiskScore) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !risk_score.has_factor(FULL_ID_VERIFICATION) {
        suggestions.push(VERIFY_IDENTITY.to_string());
    }

    if !risk_score
        .factors
        .iter()
        .any(|factor| factor.name.contains("Renter"))
    {
        suggestions.push(COMPLETE_TRIPS.to_string());
    }

    if risk_score.has_factor(BELOW_AVERAGE_RATING) {
        suggestions.push(MAINTAIN_RATINGS.to_string());
    }

    if risk_score.has_factor(AT_FAULT_CLAIMS) {
        suggestions.push(DRIVE_SAFELY.to_string());
    }

    suggestions
}
