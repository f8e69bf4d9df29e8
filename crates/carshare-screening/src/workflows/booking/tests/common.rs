use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::booking::domain::{
    GuestProfile, HostProfile, RentalHistory, UserProfile, VehicleSnapshot, VerificationStatus,
};
use crate::workflows::booking::risk::{
    RiskCalculationInput, RiskFactor, RiskScoringEngine, ScoringConfig,
};
use crate::workflows::booking::{screening_router, BookingScreeningService};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
}

pub(super) fn scored_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> RiskScoringEngine {
    RiskScoringEngine::new(ScoringConfig::default())
}

/// Fully verified, 15 trips at 4.9, no claims, one-year account, 30 years old.
pub(super) fn strong_input() -> RiskCalculationInput {
    RiskCalculationInput {
        user_id: "guest-strong".to_string(),
        id_verified: true,
        face_match_verified: true,
        completed_trips: 15,
        average_rating: 4.9,
        at_fault_claims: 0,
        account_age_months: 12.0,
        driver_age: 30,
    }
}

/// Unverified first-time renter, two weeks in, 22 years old.
pub(super) fn newcomer_input() -> RiskCalculationInput {
    RiskCalculationInput {
        user_id: "guest-new".to_string(),
        id_verified: false,
        face_match_verified: false,
        completed_trips: 0,
        average_rating: 0.0,
        at_fault_claims: 0,
        account_age_months: 0.5,
        driver_age: 22,
    }
}

pub(super) fn factor_names(factors: &[RiskFactor]) -> Vec<&str> {
    factors.iter().map(|factor| factor.name.as_str()).collect()
}

pub(super) fn guest_profile() -> GuestProfile {
    GuestProfile {
        user_id: "guest-101".to_string(),
        member_since: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid"),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).expect("valid"),
        verification: VerificationStatus {
            id_verified: true,
            face_match_verified: true,
        },
        rental_history: RentalHistory {
            completed_trips: 15,
            average_rating: 4.9,
            at_fault_claims: 0,
        },
    }
}

pub(super) fn host_profile() -> HostProfile {
    HostProfile {
        user_id: "host-7".to_string(),
        member_since: NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid"),
        date_of_birth: Some(NaiveDate::from_ymd_opt(1984, 11, 20).expect("valid")),
        verification: VerificationStatus {
            id_verified: true,
            face_match_verified: false,
        },
        rental_history: RentalHistory {
            completed_trips: 6,
            average_rating: 4.6,
            at_fault_claims: 0,
        },
        listed_vehicles: 3,
        hosted_trips: 140,
    }
}

pub(super) fn strong_guest() -> UserProfile {
    UserProfile::Guest(guest_profile())
}

pub(super) fn instant_vehicle() -> VehicleSnapshot {
    VehicleSnapshot {
        vehicle_id: "veh-tesla-3".to_string(),
        instant_book: true,
    }
}

pub(super) fn approval_vehicle() -> VehicleSnapshot {
    VehicleSnapshot {
        vehicle_id: "veh-bronco".to_string(),
        instant_book: false,
    }
}

pub(super) fn service() -> BookingScreeningService {
    BookingScreeningService::new(ScoringConfig::default())
}

pub(super) fn router() -> axum::Router {
    screening_router(Arc::new(service()))
}

pub(super) fn guest_json() -> Value {
    serde_json::json!({
        "role": "guest",
        "user_id": "guest-101",
        "member_since": "2024-01-15",
        "date_of_birth": "1990-05-01",
        "verification": { "id_verified": true, "face_match_verified": true },
        "rental_history": { "completed_trips": 15, "average_rating": 4.9, "at_fault_claims": 0 }
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
