//! End-to-end scenarios for guest scoring and booking gating through the public facade.

use carshare_screening::workflows::booking::{
    calculate_guest_risk_score, check_booking_eligibility, improvement_suggestions,
    risk_level_color, risk_level_label, BookingScreeningService, GuestProfile, RentalHistory,
    RiskCalculationInput, RiskLevel, UserProfile, VehicleSnapshot, VerificationStatus,
};
use chrono::NaiveDate;

fn input(
    id_verified: bool,
    face_match_verified: bool,
    completed_trips: u32,
    average_rating: f64,
    at_fault_claims: u32,
    account_age_months: f64,
    driver_age: u32,
) -> RiskCalculationInput {
    RiskCalculationInput {
        user_id: "guest-e2e".to_string(),
        id_verified,
        face_match_verified,
        completed_trips,
        average_rating,
        at_fault_claims,
        account_age_months,
        driver_age,
    }
}

fn strong_profile() -> RiskCalculationInput {
    input(true, true, 15, 4.9, 0, 12.0, 30)
}

#[test]
fn experienced_verified_guest_is_low_risk() {
    let score = calculate_guest_risk_score(&strong_profile());

    assert!(score.score > 80);
    assert_eq!(score.level, RiskLevel::Low);
    assert!(score.can_instant_book);
    assert!(score.has_factor("Full ID Verification"));
    assert!(score.has_factor("Experienced Renter"));
}

#[test]
fn unverified_first_timer_is_high_risk() {
    let score = calculate_guest_risk_score(&input(false, false, 0, 0.0, 0, 0.5, 22));

    assert!(score.score < 50);
    assert_eq!(score.level, RiskLevel::High);
    assert!(!score.can_instant_book);
    assert!(score.has_factor("No ID Verification"));
}

#[test]
fn twenty_year_old_cannot_rent() {
    let mut guest = strong_profile();
    guest.driver_age = 20;

    let eligibility = check_booking_eligibility(&guest, true);

    assert!(!eligibility.eligible);
    assert_eq!(
        eligibility.blocked_reason.as_deref(),
        Some("You must be at least 21 years old to rent a vehicle")
    );
}

#[test]
fn two_claims_weigh_minus_twenty() {
    let mut guest = strong_profile();
    guest.at_fault_claims = 2;

    let score = calculate_guest_risk_score(&guest);
    let claims = score
        .factors
        .iter()
        .find(|factor| factor.name == "At-Fault Claims")
        .expect("claims factor present");

    assert_eq!(claims.weight, -20.0);
}

#[test]
fn manual_vehicle_requires_approval_for_strong_guest() {
    let eligibility = check_booking_eligibility(&strong_profile(), false);

    assert!(eligibility.eligible);
    assert!(!eligibility.can_instant_book);
    assert!(eligibility.requires_approval);
}

#[test]
fn ideal_guest_gets_no_suggestions() {
    let score = calculate_guest_risk_score(&strong_profile());

    assert!(improvement_suggestions(&score).is_empty());
}

#[test]
fn level_display_tables_are_total() {
    for level in [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ] {
        assert!(risk_level_label(level).ends_with("Risk"));
        assert!(risk_level_color(level).starts_with('#'));
    }
}

#[test]
fn service_scores_guest_profile_end_to_end() {
    let service = BookingScreeningService::default();
    let profile = UserProfile::Guest(GuestProfile {
        user_id: "guest-302".to_string(),
        member_since: NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid"),
        date_of_birth: NaiveDate::from_ymd_opt(2002, 3, 9).expect("valid"),
        verification: VerificationStatus {
            id_verified: true,
            face_match_verified: true,
        },
        rental_history: RentalHistory {
            completed_trips: 10,
            average_rating: 4.5,
            at_fault_claims: 0,
        },
    });
    let vehicle = VehicleSnapshot {
        vehicle_id: "veh-civic".to_string(),
        instant_book: true,
    };
    let today = NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid");

    let report = service
        .eligibility(Some(&profile), &vehicle, today)
        .expect("eligibility computed");

    // 50 + 20 + 15 + 5 (good rating) + 5 (10+ months) - 10 (age 24)
    assert_eq!(report.risk.score, 85);
    assert!(report.eligible);
    assert!(report.can_instant_book);
    assert_eq!(report.risk.level_label, "Low Risk");
}
