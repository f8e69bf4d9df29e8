use serde::{Deserialize, Serialize};

/// Rubric configuration describing the point weights, band edges, and policy limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: f64,
    pub weights: ScoringWeights,
    pub bands: ScoringBands,
    pub thresholds: RiskThresholds,
    pub eligibility: EligibilityPolicy,
}

impl ScoringConfig {
    /// Reject threshold layouts that would make the level mapping overlap or leave gaps,
    /// and weights that would turn a bonus into a penalty or the reverse.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let RiskThresholds { low, medium, high } = self.thresholds;

        for (name, value) in [("low", low), ("medium", medium), ("high", high)] {
            if value > 100 {
                return Err(ScoringConfigError::ThresholdOutOfRange { name, value });
            }
        }

        if !(low > medium && medium > high) {
            return Err(ScoringConfigError::ThresholdOrder { low, medium, high });
        }

        if !self.base_score.is_finite() || !(0.0..=100.0).contains(&self.base_score) {
            return Err(ScoringConfigError::BaseScore(self.base_score));
        }

        for (name, value) in self.weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringConfigError::Weight { name, value });
            }
        }

        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            weights: ScoringWeights::default(),
            bands: ScoringBands::default(),
            thresholds: RiskThresholds::default(),
            eligibility: EligibilityPolicy::default(),
        }
    }
}

/// Point deltas applied by each scoring rule. Penalties are stored as positive magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub id_verification: f64,
    pub missing_id_penalty: f64,
    pub trip_history: f64,
    pub excellent_rating: f64,
    pub good_rating: f64,
    pub below_average_rating_penalty: f64,
    pub claim_penalty: f64,
    pub established_account: f64,
    pub minimum_age_penalty: f64,
    pub young_driver_penalty: f64,
}

impl ScoringWeights {
    fn entries(&self) -> [(&'static str, f64); 10] {
        [
            ("id_verification", self.id_verification),
            ("missing_id_penalty", self.missing_id_penalty),
            ("trip_history", self.trip_history),
            ("excellent_rating", self.excellent_rating),
            ("good_rating", self.good_rating),
            ("below_average_rating_penalty", self.below_average_rating_penalty),
            ("claim_penalty", self.claim_penalty),
            ("established_account", self.established_account),
            ("minimum_age_penalty", self.minimum_age_penalty),
            ("young_driver_penalty", self.young_driver_penalty),
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            id_verification: 20.0,
            missing_id_penalty: 5.0,
            trip_history: 15.0,
            excellent_rating: 10.0,
            good_rating: 5.0,
            below_average_rating_penalty: 5.0,
            claim_penalty: 10.0,
            established_account: 5.0,
            minimum_age_penalty: 15.0,
            young_driver_penalty: 10.0,
        }
    }
}

/// Inclusive lower edges of the history, rating, tenure, and age bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringBands {
    pub experienced_trips: u32,
    pub moderate_trips: u32,
    pub excellent_rating: f64,
    pub good_rating: f64,
    pub below_average_rating: f64,
    pub established_account_months: f64,
    pub minimum_driver_age: u32,
    pub young_driver_age: u32,
}

impl Default for ScoringBands {
    fn default() -> Self {
        Self {
            experienced_trips: 10,
            moderate_trips: 5,
            excellent_rating: 4.8,
            good_rating: 4.5,
            below_average_rating: 4.0,
            established_account_months: 6.0,
            minimum_driver_age: 21,
            young_driver_age: 25,
        }
    }
}

/// Lower score bounds for the low, medium, and high risk levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 80,
            medium: 60,
            high: 30,
        }
    }
}

/// Hard policy limits layered on top of the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub restricted_claims: u32,
    pub suspension_claims: u32,
    pub minimum_score: u8,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            restricted_claims: 2,
            suspension_claims: 3,
            minimum_score: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("risk threshold '{name}' must be within 0-100 (found {value})")]
    ThresholdOutOfRange { name: &'static str, value: u8 },
    #[error("risk thresholds must descend low > medium > high (found {low}/{medium}/{high})")]
    ThresholdOrder { low: u8, medium: u8, high: u8 },
    #[error("base score must be a finite value within 0-100 (found {0})")]
    BaseScore(f64),
    #[error("weight '{name}' must be a finite, non-negative magnitude (found {value})")]
    Weight { name: &'static str, value: f64 },
}
