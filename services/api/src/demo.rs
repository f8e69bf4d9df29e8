use crate::infra::parse_date;
use carshare_screening::error::AppError;
use carshare_screening::workflows::booking::{
    BookingScreeningService, EligibilityReport, GuestProfile, HostProfile, RentalHistory,
    UserProfile, VehicleSnapshot, VerificationStatus,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON user profile (`role` is `guest` or `host`)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Identifier of the vehicle being booked
    #[arg(long, default_value = "cli-vehicle")]
    pub(crate) vehicle_id: String,
    /// Treat the vehicle as accepting instant bookings
    #[arg(long)]
    pub(crate) vehicle_instant_book: bool,
    /// Evaluation date for age and tenure (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for age and tenure (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        vehicle_id,
        vehicle_instant_book,
        today,
    } = args;

    let raw = std::fs::read_to_string(profile)?;
    let profile: UserProfile = serde_json::from_str(&raw)?;
    let vehicle = VehicleSnapshot {
        vehicle_id,
        instant_book: vehicle_instant_book,
    };
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let service = BookingScreeningService::default();
    let report = service.eligibility(Some(&profile), &vehicle, today)?;
    render_eligibility(profile.role_label(), &report);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let service = BookingScreeningService::default();
    let vehicle = VehicleSnapshot {
        vehicle_id: "demo-model-y".to_string(),
        instant_book: true,
    };

    println!("Guest screening demo (evaluated {today})");
    for profile in demo_profiles(today) {
        let report = service.eligibility(Some(&profile), &vehicle, today)?;
        println!();
        render_eligibility(profile.role_label(), &report);
    }

    Ok(())
}

fn years_before(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(chrono::Months::new(years * 12))
        .unwrap_or(today)
}

fn demo_profiles(today: NaiveDate) -> Vec<UserProfile> {
    vec![
        UserProfile::Guest(GuestProfile {
            user_id: "demo-veteran".to_string(),
            member_since: years_before(today, 3),
            date_of_birth: years_before(today, 34),
            verification: VerificationStatus {
                id_verified: true,
                face_match_verified: true,
            },
            rental_history: RentalHistory {
                completed_trips: 22,
                average_rating: 4.9,
                at_fault_claims: 0,
            },
        }),
        UserProfile::Guest(GuestProfile {
            user_id: "demo-newcomer".to_string(),
            member_since: today,
            date_of_birth: years_before(today, 22),
            verification: VerificationStatus::default(),
            rental_history: RentalHistory::default(),
        }),
        UserProfile::Guest(GuestProfile {
            user_id: "demo-claims".to_string(),
            member_since: years_before(today, 2),
            date_of_birth: years_before(today, 41),
            verification: VerificationStatus {
                id_verified: true,
                face_match_verified: true,
            },
            rental_history: RentalHistory {
                completed_trips: 8,
                average_rating: 3.8,
                at_fault_claims: 3,
            },
        }),
        UserProfile::Host(HostProfile {
            user_id: "demo-host".to_string(),
            member_since: years_before(today, 4),
            date_of_birth: Some(years_before(today, 29)),
            verification: VerificationStatus {
                id_verified: true,
                face_match_verified: false,
            },
            rental_history: RentalHistory {
                completed_trips: 4,
                average_rating: 4.6,
                at_fault_claims: 0,
            },
            listed_vehicles: 2,
            hosted_trips: 87,
        }),
    ]
}

fn render_eligibility(role: &str, report: &EligibilityReport) {
    let risk = &report.risk;
    println!(
        "{} ({role}) -> vehicle {}: {}",
        report.user_id,
        report.vehicle_id,
        report.decision_summary()
    );
    println!(
        "Score {}/100 | {} ({})",
        risk.score, risk.level_label, risk.level_color
    );

    println!("Factors");
    for factor in &risk.factors {
        println!(
            "- {} [{:?}, {:+.1}]: {}",
            factor.name, factor.impact, factor.weight, factor.description
        );
    }

    if report.restrictions.is_empty() {
        println!("Restrictions: none");
    } else {
        println!("Restrictions");
        for restriction in &report.restrictions {
            println!("- {restriction}");
        }
    }

    if risk.suggestions.is_empty() {
        println!("Suggestions: none");
    } else {
        println!("Suggestions");
        for suggestion in &risk.suggestions {
            println!("- {suggestion}");
        }
    }
}
