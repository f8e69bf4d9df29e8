//! Guest risk scoring and booking eligibility.
//!
//! `risk` holds the pure scoring engine. The remaining modules project account
//! profiles into its input, wrap its output in render-ready reports, and expose
//! both over HTTP.

pub mod domain;
pub mod projection;
pub mod report;
pub mod risk;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    GuestProfile, HostProfile, RentalHistory, UserProfile, VehicleSnapshot, VerificationStatus,
};
pub use projection::{ProfileProjector, ProjectionError};
pub use report::{EligibilityReport, GuestRiskReport};
pub use risk::{
    calculate_guest_risk_score, check_booking_eligibility, improvement_suggestions,
    risk_level_color, risk_level_label, BlockReason, BookingEligibility, FactorImpact,
    RiskCalculationInput, RiskFactor, RiskLevel, RiskScore, RiskScoringEngine, RiskThresholds,
    ScoringConfig, ScoringConfigError,
};
pub use router::screening_router;
pub use service::{BookingScreeningService, ScreeningError};
