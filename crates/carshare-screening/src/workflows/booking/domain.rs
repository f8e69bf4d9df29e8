use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity checks completed during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub id_verified: bool,
    pub face_match_verified: bool,
}

/// Trips the user finished as a renter, with the resulting reputation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RentalHistory {
    pub completed_trips: u32,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub at_fault_claims: u32,
}

/// Account that books vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestProfile {
    pub user_id: String,
    pub member_since: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub verification: VerificationStatus,
    pub rental_history: RentalHistory,
}

/// Account that lists vehicles. Hosts may also book, using their own renter history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostProfile {
    pub user_id: String,
    pub member_since: NaiveDate,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    pub verification: VerificationStatus,
    #[serde(default)]
    pub rental_history: RentalHistory,
    #[serde(default)]
    pub listed_vehicles: u32,
    #[serde(default)]
    pub hosted_trips: u32,
}

/// User record as supplied by the account service, tagged by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum UserProfile {
    Guest(GuestProfile),
    Host(HostProfile),
}

impl UserProfile {
    pub fn user_id(&self) -> &str {
        match self {
            UserProfile::Guest(guest) => &guest.user_id,
            UserProfile::Host(host) => &host.user_id,
        }
    }

    pub const fn role_label(&self) -> &'static str {
        match self {
            UserProfile::Guest(_) => "guest",
            UserProfile::Host(_) => "host",
        }
    }
}

/// The slice of a catalog vehicle that booking gating depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub vehicle_id: String,
    pub instant_book: bool,
}
