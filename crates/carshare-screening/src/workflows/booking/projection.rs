use chrono::{Datelike, Months, NaiveDate};

use super::domain::{RentalHistory, UserProfile, VerificationStatus};
use super::risk::RiskCalculationInput;

const MAX_RATING: f64 = 5.0;

/// Validation errors raised while flattening a profile for scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("profile {user_id} has no date of birth on file")]
    MissingDateOfBirth { user_id: String },
    #[error("profile {user_id} has a date of birth in the future")]
    DateOfBirthInFuture { user_id: String },
    #[error("profile {user_id} has average rating {rating} outside 0-5")]
    RatingOutOfRange { user_id: String, rating: f64 },
}

/// Converts role-specific profiles into the flat scoring input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileProjector;

impl ProfileProjector {
    pub fn project(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
    ) -> Result<RiskCalculationInput, ProjectionError> {
        let (user_id, member_since, date_of_birth, verification, history) = match profile {
            UserProfile::Guest(guest) => (
                &guest.user_id,
                guest.member_since,
                Some(guest.date_of_birth),
                guest.verification,
                guest.rental_history,
            ),
            UserProfile::Host(host) => (
                &host.user_id,
                host.member_since,
                host.date_of_birth,
                host.verification,
                host.rental_history,
            ),
        };

        let date_of_birth = date_of_birth.ok_or_else(|| ProjectionError::MissingDateOfBirth {
            user_id: user_id.clone(),
        })?;
        let driver_age =
            today
                .years_since(date_of_birth)
                .ok_or_else(|| ProjectionError::DateOfBirthInFuture {
                    user_id: user_id.clone(),
                })?;

        let rating = history.average_rating;
        if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
            return Err(ProjectionError::RatingOutOfRange {
                user_id: user_id.clone(),
                rating,
            });
        }

        Ok(flatten(
            user_id,
            verification,
            history,
            account_age_months(member_since, today),
            driver_age,
        ))
    }
}

fn flatten(
    user_id: &str,
    verification: VerificationStatus,
    history: RentalHistory,
    account_age_months: f64,
    driver_age: u32,
) -> RiskCalculationInput {
    RiskCalculationInput {
        user_id: user_id.to_string(),
        id_verified: verification.id_verified,
        face_match_verified: verification.face_match_verified,
        completed_trips: history.completed_trips,
        average_rating: if history.completed_trips == 0 {
            0.0
        } else {
            history.average_rating
        },
        at_fault_claims: history.at_fault_claims,
        account_age_months,
        driver_age,
    }
}

/// Whole calendar months since sign-up plus the elapsed share of the month in progress.
/// Month ends clamp the way `NaiveDate::checked_add_months` does. Accounts dated in the
/// future count as brand new.
pub(crate) fn account_age_months(member_since: NaiveDate, today: NaiveDate) -> f64 {
    if today <= member_since {
        return 0.0;
    }

    let span = (today.year() - member_since.year()) * 12 + today.month() as i32
        - member_since.month() as i32;
    let mut whole = u32::try_from(span).unwrap_or(0);
    let mut anchor = member_since.checked_add_months(Months::new(whole));
    while whole > 0 && anchor.map_or(true, |date| date > today) {
        whole -= 1;
        anchor = member_since.checked_add_months(Months::new(whole));
    }

    let Some(anchor) = anchor else {
        return f64::from(whole);
    };
    let partial = match member_since.checked_add_months(Months::new(whole + 1)) {
        Some(next) if next > anchor => {
            (today - anchor).num_days() as f64 / (next - anchor).num_days() as f64
        }
        _ => 0.0,
    };

    f64::from(whole) + partial
}
