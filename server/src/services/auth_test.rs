use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_from_str_accepts_canonical_names() {
    assert_eq!(Role::from_str("USER"), Some(Role::User));
    assert_eq!(Role::from_str("OFFICER"), Some(Role::Officer));
    assert_eq!(Role::from_str("ADMIN"), Some(Role::Admin));
}

#[test]
fn role_from_str_is_case_insensitive() {
    assert_eq!(Role::from_str("user"), Some(Role::User));
    assert_eq!(Role::from_str("Admin"), Some(Role::Admin));
    assert_eq!(Role::from_str("  officer  "), Some(Role::Officer));
}

#[test]
fn role_from_str_rejects_unknown() {
    assert_eq!(Role::from_str("SUPERUSER"), None);
    assert_eq!(Role::from_str(""), None);
}

#[test]
fn role_as_str_round_trips() {
    for role in [Role::User, Role::Officer, Role::Admin] {
        assert_eq!(Role::from_str(role.as_str()), Some(role));
    }
}

#[test]
fn role_satisfies_itself() {
    assert!(Role::User.satisfies(Role::User));
    assert!(Role::Officer.satisfies(Role::Officer));
    assert!(Role::Admin.satisfies(Role::Admin));
}

#[test]
fn admin_satisfies_everything() {
    assert!(Role::Admin.satisfies(Role::User));
    assert!(Role::Admin.satisfies(Role::Officer));
}

#[test]
fn officer_satisfies_user_but_not_admin() {
    assert!(Role::Officer.satisfies(Role::User));
    assert!(!Role::Officer.satisfies(Role::Admin));
}

#[test]
fn user_satisfies_nothing_above() {
    assert!(!Role::User.satisfies(Role::Officer));
    assert!(!Role::User.satisfies(Role::Admin));
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(
        normalize_email("  John.Doe@Example.COM  "),
        Some("john.doe@example.com".to_owned())
    );
}

#[test]
fn normalize_email_rejects_empty() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("   "), None);
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("john.doe.example.com"), None);
}

#[test]
fn normalize_email_rejects_empty_local_or_domain() {
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("john@"), None);
}

#[test]
fn normalize_email_rejects_double_at() {
    assert_eq!(normalize_email("a@b@c.com"), None);
}

// =============================================================================
// is_iso_date
// =============================================================================

#[test]
fn is_iso_date_accepts_valid_date() {
    assert!(is_iso_date("1985-06-15"));
    assert!(is_iso_date("2000-01-01"));
}

#[test]
fn is_iso_date_rejects_malformed() {
    assert!(!is_iso_date("15-06-1985"));
    assert!(!is_iso_date("1985/06/15"));
    assert!(!is_iso_date("yesterday"));
    assert!(!is_iso_date(""));
}

#[test]
fn is_iso_date_rejects_impossible_day() {
    assert!(!is_iso_date("1985-02-30"));
    assert!(!is_iso_date("1985-13-01"));
}

// =============================================================================
// AuthError
// =============================================================================

#[test]
fn auth_error_display_never_distinguishes_login_failures() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
}

#[test]
fn auth_error_display_email_exists() {
    assert_eq!(AuthError::EmailExists.to_string(), "email already exists");
}
