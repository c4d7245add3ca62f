//! Sample-data seeding for demo deployments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated behind the `SEED_SAMPLE_DATA` env flag at startup. Seeds a fixed
//! roster of policyholders and staff, a handful of ACTIVE policies, and
//! claims covering every adjudication status, so the review queue is
//! demonstrable on a fresh database. Idempotent: accounts insert-if-absent
//! by email, and policies/claims are only created into empty tables.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::{password, payment};

type SampleUser = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

// (email, name, address, date_of_birth, aadhaar, pan, password)
const SAMPLE_USERS: &[SampleUser] = &[
    (
        "john.doe@example.com",
        "John Doe",
        "123 Main Street, Mumbai, Maharashtra 400001",
        "1985-06-15",
        "123456789012",
        "ABCDE1234F",
        "TestPassword123!",
    ),
    (
        "jane.smith@example.com",
        "Jane Smith",
        "456 Oak Avenue, Delhi, Delhi 110001",
        "1990-03-22",
        "987654321098",
        "XYZNP5678G",
        "TestPassword456!",
    ),
    (
        "alex.johnson@example.com",
        "Alex Johnson",
        "789 Pine Road, Bangalore, Karnataka 560001",
        "1988-11-30",
        "456789123456",
        "PQRST9012H",
        "AlexPass789!",
    ),
    (
        "maria.garcia@example.com",
        "Maria Garcia",
        "321 Cedar Lane, Chennai, Tamil Nadu 600001",
        "1992-08-14",
        "789012345678",
        "LMNOP3456J",
        "MariaSecure456!",
    ),
    (
        "david.wilson@example.com",
        "David Wilson",
        "654 Maple Drive, Pune, Maharashtra 411001",
        "1983-02-28",
        "234567890123",
        "QWERT7890K",
        "DavidPass321!",
    ),
    (
        "priya.sharma@example.com",
        "Priya Sharma",
        "987 Birch Street, Hyderabad, Telangana 500001",
        "1995-07-19",
        "567890123456",
        "ASDFG2345L",
        "PriyaSecure123!",
    ),
    (
        "robert.brown@example.com",
        "Robert Brown",
        "147 Elm Avenue, Kolkata, West Bengal 700001",
        "1980-12-05",
        "890123456789",
        "ZXCVB6789M",
        "RobertPass987!",
    ),
    (
        "sarah.davis@example.com",
        "Sarah Davis",
        "258 Willow Court, Ahmedabad, Gujarat 380001",
        "1987-04-16",
        "345678901234",
        "HJKLM4567N",
        "SarahSecure654!",
    ),
];

// (email, name, password, role)
const SAMPLE_OFFICERS: &[(&str, &str, &str, &str)] = &[
    ("officer1@insurance.com", "Michael Johnson", "OfficerSecure789!", "OFFICER"),
    ("officer2@insurance.com", "Lisa Anderson", "Officer456Pass!", "OFFICER"),
    ("admin@insurance.com", "Sarah Wilson", "AdminSecure321!", "ADMIN"),
    ("supervisor@insurance.com", "James Thompson", "SupervisorPass654!", "OFFICER"),
];

// (owner email, vehicle_type, vehicle_number, policy_package, premium, days_ago)
const SAMPLE_PROPOSALS: &[(&str, &str, &str, &str, f64, i32)] = &[
    ("john.doe@example.com", "Car", "MH01AB1234", "Comprehensive", 6500.0, 21),
    ("john.doe@example.com", "Bike", "MH02CD5678", "Basic Third Party", 4000.0, 14),
    ("jane.smith@example.com", "Car", "MH03EF9012", "Comprehensive Plus", 7000.0, 9),
    ("alex.johnson@example.com", "Car", "MH04GH3456", "Premium", 7500.0, 4),
];

// (reason, status), claimed against the sample proposals in order, cycling.
const SAMPLE_CLAIMS: &[(&str, &str)] = &[
    ("Vehicle damaged in accident", "PENDING"),
    ("Theft of vehicle accessories", "APPROVED"),
    ("Natural calamity damage", "UNDER_REVIEW"),
    ("Third party liability claim", "REJECTED"),
    ("Fire damage to vehicle", "PENDING"),
    ("Collision with another vehicle", "PENDING"),
];

/// Whether sample-data seeding is enabled via `SEED_SAMPLE_DATA`.
#[must_use]
pub fn seed_enabled() -> bool {
    std::env::var("SEED_SAMPLE_DATA")
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(false)
}

/// Seed the sample roster, policies, and claims. Safe to run repeatedly.
///
/// # Errors
///
/// Returns a database error if any insert or lookup fails.
pub async fn seed_sample_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    seed_users(pool).await?;
    seed_officers(pool).await?;
    seed_proposals(pool).await?;
    seed_claims(pool).await?;
    tracing::info!("sample data initialization completed");
    Ok(())
}

async fn seed_users(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (email, name, address, dob, aadhaar, pan, pw) in SAMPLE_USERS {
        let salt = password::generate_salt();
        let hash = password::hash_password(pw, &salt);
        let result = sqlx::query(
            r"INSERT INTO users
                  (id, name, email, password_hash, password_salt,
                   address, date_of_birth, aadhaar_number, pan_number, role)
              VALUES ($1, $2, $3, $4, $5, $6, $7::date, $8, $9, 'USER')
              ON CONFLICT (email) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(hash)
        .bind(salt)
        .bind(address)
        .bind(dob)
        .bind(aadhaar)
        .bind(pan)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(email, name, "sample user created");
        }
    }
    Ok(())
}

async fn seed_officers(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (email, name, pw, role) in SAMPLE_OFFICERS {
        let salt = password::generate_salt();
        let hash = password::hash_password(pw, &salt);
        let result = sqlx::query(
            r"INSERT INTO officers (id, name, email, password_hash, password_salt, role)
              VALUES ($1, $2, $3, $4, $5, $6)
              ON CONFLICT (email) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(hash)
        .bind(salt)
        .bind(role)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(email, name, role, "sample officer created");
        }
    }
    Ok(())
}

async fn seed_proposals(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM proposals")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (owner_email, vehicle_type, vehicle_number, package, premium, days_ago) in SAMPLE_PROPOSALS {
        let owner = sqlx::query("SELECT id FROM users WHERE email = $1")
            .bind(owner_email)
            .fetch_optional(pool)
            .await?;
        let Some(owner) = owner else { continue };
        let owner_id: Uuid = owner.get("id");

        sqlx::query(
            r"INSERT INTO proposals
                  (id, user_id, vehicle_type, vehicle_number, policy_package,
                   premium_amount, status, submission_date, payment_date, transaction_id)
              VALUES ($1, $2, $3, $4, $5, $6, 'ACTIVE',
                      CURRENT_DATE - $7, CURRENT_DATE - $8, $9)",
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(vehicle_type)
        .bind(vehicle_number)
        .bind(package)
        .bind(premium)
        .bind(days_ago)
        .bind(days_ago - 2)
        .bind(payment::generate_transaction_id())
        .execute(pool)
        .await?;

        tracing::info!(owner = owner_email, vehicle_number, "sample proposal created");
    }
    Ok(())
}

async fn seed_claims(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM claims")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let proposals = sqlx::query("SELECT id, user_id FROM proposals ORDER BY submission_date, vehicle_number")
        .fetch_all(pool)
        .await?;
    if proposals.is_empty() {
        return Ok(());
    }

    for (i, (reason, status)) in SAMPLE_CLAIMS.iter().enumerate() {
        let proposal = &proposals[i % proposals.len()];
        let proposal_id: Uuid = proposal.get("id");
        let user_id: Uuid = proposal.get("user_id");

        sqlx::query(
            r"INSERT INTO claims (id, user_id, proposal_id, reason, status, date_filed)
              VALUES ($1, $2, $3, $4, $5, CURRENT_DATE - $6)",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(proposal_id)
        .bind(reason)
        .bind(status)
        .bind(i32::try_from(i).unwrap_or(0) + 1)
        .execute(pool)
        .await?;

        tracing::info!(reason, status, "sample claim created");
    }
    Ok(())
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
