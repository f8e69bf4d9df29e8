use super::config::ScoringConfig;
use super::{RiskCalculationInput, RiskScore};
use serde::{Deserialize, Serialize};

pub(crate) const ID_VERIFICATION_REQUIRED: &str = "ID verification required before booking";
pub(crate) const MINIMUM_AGE_REQUIRED: &str = "Drivers must be 21 or older";
pub(crate) const CLAIMS_LIMIT_VEHICLES: &str =
    "Limited to standard vehicles due to at-fault claims history";
pub(crate) const MANUAL_APPROVAL_REQUIRED: &str = "Host approval required for all bookings";

/// Hard policy rules that stop a booking regardless of vehicle settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    UnderMinimumAge,
    SuspendedForClaims,
    ScoreBelowMinimum,
}

impl BlockReason {
    pub const fn message(self) -> &'static str {
        match self {
            BlockReason::UnderMinimumAge => "You must be at least 21 years old to rent a vehicle",
            BlockReason::SuspendedForClaims => "Account suspended due to multiple at-fault claims",
            BlockReason::ScoreBelowMinimum => "Unable to approve booking at this time",
        }
    }
}

/// Restrictions in fixed order; every condition is checked independently.
pub(crate) fn restrictions_for(
    input: &RiskCalculationInput,
    requires_manual_approval: bool,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut restrictions = Vec::new();

    if !input.id_verified {
        restrictions.push(ID_VERIFICATION_REQUIRED.to_string());
    }

    if input.driver_age < config.bands.minimum_driver_age {
        restrictions.push(MINIMUM_AGE_REQUIRED.to_string());
    }

    if input.at_fault_claims >= config.eligibility.restricted_claims {
        restrictions.push(CLAIMS_LIMIT_VEHICLES.to_string());
    }

    if requires_manual_approval {
        restrictions.push(MANUAL_APPROVAL_REQUIRED.to_string());
    }

    restrictions
}

/// First matching hard block wins.
pub(crate) fn hard_block(
    input: &RiskCalculationInput,
    risk_score: &RiskScore,
    config: &ScoringConfig,
) -> Option<BlockReason> {
    if input.driver_age < config.bands.minimum_driver_age {
        return Some(BlockReason::UnderMinimumAge);
    }

    if input.at_fault_claims >= config.eligibility.suspension_claims {
        return Some(BlockReason::SuspendedForClaims);
    }

    if risk_score.score < config.eligibility.minimum_score {
        return Some(BlockReason::ScoreBelowMinimum);
    }

    None
}
