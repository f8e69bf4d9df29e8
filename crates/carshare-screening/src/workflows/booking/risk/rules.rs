use super::config::ScoringConfig;
use super::{FactorImpact, RiskCalculationInput, RiskFactor};

pub(crate) const FULL_ID_VERIFICATION: &str = "Full ID Verification";
pub(crate) const PARTIAL_ID_VERIFICATION: &str = "Partial ID Verification";
pub(crate) const NO_ID_VERIFICATION: &str = "No ID Verification";
pub(crate) const EXPERIENCED_RENTER: &str = "Experienced Renter";
pub(crate) const MODERATE_EXPERIENCE: &str = "Moderate Experience";
pub(crate) const FIRST_TIME_RENTER: &str = "First-time Renter";
pub(crate) const EXCELLENT_RATING: &str = "Excellent Rating";
pub(crate) const GOOD_RATING: &str = "Good Rating";
pub(crate) const BELOW_AVERAGE_RATING: &str = "Below Average Rating";
pub(crate) const AT_FAULT_CLAIMS: &str = "At-Fault Claims";
pub(crate) const ESTABLISHED_ACCOUNT: &str = "Established Account";
pub(crate) const NEW_ACCOUNT: &str = "New Account";
pub(crate) const MINIMUM_AGE_DRIVER: &str = "Minimum Age Driver";
pub(crate) const YOUNG_DRIVER: &str = "Young Driver";

/// Accumulates the running score alongside the factor trail.
struct Tally {
    score: f64,
    factors: Vec<RiskFactor>,
}

impl Tally {
    fn apply(&mut self, name: &str, impact: FactorImpact, weight: f64, description: String) {
        self.score += weight;
        self.factors.push(RiskFactor {
            name: name.to_string(),
            impact,
            weight,
            description,
        });
    }
}

/// Runs every rule in evaluation order and returns the factors with the unclamped score.
pub(crate) fn score_input(
    input: &RiskCalculationInput,
    config: &ScoringConfig,
) -> (Vec<RiskFactor>, f64) {
    let weights = &config.weights;
    let bands = &config.bands;
    let mut tally = Tally {
        score: config.base_score,
        factors: Vec::new(),
    };

    match (input.id_verified, input.face_match_verified) {
        (true, true) => tally.apply(
            FULL_ID_VERIFICATION,
            FactorImpact::Positive,
            weights.id_verification,
            "Government ID and face match verified".to_string(),
        ),
        (true, false) => tally.apply(
            PARTIAL_ID_VERIFICATION,
            FactorImpact::Positive,
            weights.id_verification / 2.0,
            "Government ID verified, face match pending".to_string(),
        ),
        // A face match without an ID document has nothing to match against.
        (false, _) => tally.apply(
            NO_ID_VERIFICATION,
            FactorImpact::Negative,
            -weights.missing_id_penalty,
            "Identity has not been verified".to_string(),
        ),
    }

    let trips = input.completed_trips;
    if trips >= bands.experienced_trips {
        tally.apply(
            EXPERIENCED_RENTER,
            FactorImpact::Positive,
            weights.trip_history,
            format!("{trips} completed trips"),
        );
    } else if trips >= bands.moderate_trips {
        tally.apply(
            MODERATE_EXPERIENCE,
            FactorImpact::Positive,
            weights.trip_history / 2.0,
            format!("{trips} completed trips"),
        );
    } else if trips == 0 {
        tally.apply(
            FIRST_TIME_RENTER,
            FactorImpact::Neutral,
            0.0,
            "No completed trips yet".to_string(),
        );
    }

    if trips > 0 {
        let rating = input.average_rating;
        if rating >= bands.excellent_rating {
            tally.apply(
                EXCELLENT_RATING,
                FactorImpact::Positive,
                weights.excellent_rating,
                format!("{rating:.1} average rating"),
            );
        } else if rating >= bands.good_rating {
            tally.apply(
                GOOD_RATING,
                FactorImpact::Positive,
                weights.good_rating,
                format!("{rating:.1} average rating"),
            );
        } else if rating < bands.below_average_rating {
            tally.apply(
                BELOW_AVERAGE_RATING,
                FactorImpact::Negative,
                -weights.below_average_rating_penalty,
                format!("{rating:.1} average rating"),
            );
        }
    }

    let claims = input.at_fault_claims;
    if claims > 0 {
        let penalty = f64::from(claims) * weights.claim_penalty;
        tally.apply(
            AT_FAULT_CLAIMS,
            FactorImpact::Negative,
            -penalty,
            format!("{claims} at-fault claim(s) on record"),
        );
    }

    let months = input.account_age_months;
    if months >= bands.established_account_months {
        tally.apply(
            ESTABLISHED_ACCOUNT,
            FactorImpact::Positive,
            weights.established_account,
            format!("Member for {months:.0} months"),
        );
    } else {
        tally.apply(
            NEW_ACCOUNT,
            FactorImpact::Neutral,
            0.0,
            format!("Member for {months:.1} months"),
        );
    }

    let age = input.driver_age;
    if age < bands.minimum_driver_age {
        tally.apply(
            MINIMUM_AGE_DRIVER,
            FactorImpact::Negative,
            -weights.minimum_age_penalty,
            format!("Driver is {age}, under {}", bands.minimum_driver_age),
        );
    } else if age < bands.young_driver_age {
        tally.apply(
            YOUNG_DRIVER,
            FactorImpact::Negative,
            -weights.young_driver_penalty,
            format!("Driver is {age}, under {}", bands.young_driver_age),
        );
    }

    (tally.factors, tally.score)
}
