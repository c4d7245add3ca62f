use std::collections::HashSet;

use super::*;
use crate::services::auth::Role;
use crate::services::claim::ClaimStatus;
use crate::services::proposal;

// =============================================================================
// seed_enabled
// =============================================================================

#[test]
fn seed_enabled_defaults_to_false() {
    // Only meaningful when the var is unset, which is the test default.
    if std::env::var("SEED_SAMPLE_DATA").is_err() {
        assert!(!seed_enabled());
    }
}

// =============================================================================
// roster consistency
// =============================================================================

#[test]
fn sample_user_emails_are_unique() {
    let emails: HashSet<_> = SAMPLE_USERS.iter().map(|u| u.0).collect();
    assert_eq!(emails.len(), SAMPLE_USERS.len());
}

#[test]
fn sample_officer_emails_are_unique() {
    let emails: HashSet<_> = SAMPLE_OFFICERS.iter().map(|o| o.0).collect();
    assert_eq!(emails.len(), SAMPLE_OFFICERS.len());
}

#[test]
fn sample_officers_include_exactly_one_admin() {
    let admins = SAMPLE_OFFICERS.iter().filter(|o| o.3 == "ADMIN").count();
    assert_eq!(admins, 1);
}

#[test]
fn sample_officer_roles_all_parse() {
    for (_, _, _, role) in SAMPLE_OFFICERS {
        assert!(Role::from_str(role).is_some());
    }
}

#[test]
fn sample_user_dates_are_valid_iso() {
    for user in SAMPLE_USERS {
        assert!(crate::services::auth::is_iso_date(user.3), "bad date for {}", user.0);
    }
}

#[test]
fn sample_proposal_owners_are_roster_members() {
    let emails: HashSet<_> = SAMPLE_USERS.iter().map(|u| u.0).collect();
    for (owner, ..) in SAMPLE_PROPOSALS {
        assert!(emails.contains(owner), "unknown owner {owner}");
    }
}

#[test]
fn sample_proposal_terms_all_price() {
    for (_, vehicle, _, package, ..) in SAMPLE_PROPOSALS {
        assert!(proposal::vehicle_base_rate(vehicle).is_some(), "vehicle {vehicle}");
        assert!(proposal::package_rate(package).is_some(), "package {package}");
    }
}

#[test]
fn sample_proposal_premiums_match_the_rate_card() {
    for (_, vehicle, number, package, premium, _) in SAMPLE_PROPOSALS {
        let expected = proposal::compute_premium(vehicle, package).unwrap();
        assert!((premium - expected).abs() < f64::EPSILON, "premium for {number}");
    }
}

#[test]
fn sample_claims_cover_every_status() {
    let statuses: HashSet<_> = SAMPLE_CLAIMS.iter().map(|c| c.1).collect();
    for status in ["PENDING", "UNDER_REVIEW", "APPROVED", "REJECTED"] {
        assert!(statuses.contains(status), "missing {status}");
    }
}

#[test]
fn sample_claim_statuses_all_parse() {
    for (_, status) in SAMPLE_CLAIMS {
        assert!(ClaimStatus::from_str(status).is_some());
    }
}
