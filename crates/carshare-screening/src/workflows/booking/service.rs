use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::domain::{UserProfile, VehicleSnapshot};
use super::projection::{ProfileProjector, ProjectionError};
use super::report::{EligibilityReport, GuestRiskReport};
use super::risk::{RiskCalculationInput, RiskScoringEngine, ScoringConfig};

/// Service composing the profile projector and the scoring engine.
pub struct BookingScreeningService {
    projector: ProfileProjector,
    engine: Arc<RiskScoringEngine>,
}

impl BookingScreeningService {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_engine(Arc::new(RiskScoringEngine::new(config)))
    }

    pub fn with_engine(engine: Arc<RiskScoringEngine>) -> Self {
        Self {
            projector: ProfileProjector,
            engine,
        }
    }

    pub fn engine(&self) -> &RiskScoringEngine {
        &self.engine
    }

    /// Score the signed-in user as of `today`.
    pub fn score(
        &self,
        profile: Option<&UserProfile>,
        today: NaiveDate,
    ) -> Result<GuestRiskReport, ScreeningError> {
        let input = self.input_for(profile, today)?;
        let risk_score = self.engine.calculate_guest_risk_score(&input);

        debug!(
            user_id = %input.user_id,
            score = risk_score.score,
            level = ?risk_score.level,
            factors = risk_score.factors.len(),
            "guest risk scored"
        );

        Ok(GuestRiskReport::from_score(&input.user_id, &risk_score))
    }

    /// Decide whether the signed-in user may book `vehicle`.
    pub fn eligibility(
        &self,
        profile: Option<&UserProfile>,
        vehicle: &VehicleSnapshot,
        today: NaiveDate,
    ) -> Result<EligibilityReport, ScreeningError> {
        let input = self.input_for(profile, today)?;
        let eligibility = self
            .engine
            .check_booking_eligibility(&input, vehicle.instant_book);

        match &eligibility.blocked_reason {
            Some(reason) => info!(
                user_id = %input.user_id,
                vehicle_id = %vehicle.vehicle_id,
                score = eligibility.risk_score.score,
                reason = %reason,
                "booking blocked"
            ),
            None => debug!(
                user_id = %input.user_id,
                vehicle_id = %vehicle.vehicle_id,
                score = eligibility.risk_score.score,
                can_instant_book = eligibility.can_instant_book,
                requires_approval = eligibility.requires_approval,
                "booking eligibility checked"
            ),
        }

        Ok(EligibilityReport::from_eligibility(
            &input.user_id,
            &vehicle.vehicle_id,
            &eligibility,
        ))
    }

    fn input_for(
        &self,
        profile: Option<&UserProfile>,
        today: NaiveDate,
    ) -> Result<RiskCalculationInput, ScreeningError> {
        let profile = profile.ok_or(ScreeningError::MissingProfile)?;
        let input = self.projector.project(profile, today)?;
        Ok(input)
    }
}

impl Default for BookingScreeningService {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Error raised by the screening service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScreeningError {
    #[error("no user profile supplied for screening")]
    MissingProfile,
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
