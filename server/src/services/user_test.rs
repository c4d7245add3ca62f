use super::*;

fn sample_user() -> UserRow {
    UserRow {
        id: Uuid::nil(),
        name: "John Doe".into(),
        email: "john.doe@example.com".into(),
        address: "123 Main Street, Mumbai, Maharashtra 400001".into(),
        date_of_birth: "1985-06-15".into(),
        aadhaar_number: "123456789012".into(),
        pan_number: "ABCDE1234F".into(),
        role: "USER".into(),
        created_at: "2024-01-01".into(),
    }
}

// =============================================================================
// UserRow serialization
// =============================================================================

#[test]
fn user_row_serializes_camel_case() {
    let json = serde_json::to_value(sample_user()).unwrap();
    assert_eq!(json["dateOfBirth"], "1985-06-15");
    assert_eq!(json["aadhaarNumber"], "123456789012");
    assert_eq!(json["panNumber"], "ABCDE1234F");
    assert_eq!(json["createdAt"], "2024-01-01");
}

#[test]
fn user_row_never_carries_password_fields() {
    let json = serde_json::to_string(&sample_user()).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("salt"));
    assert!(!json.contains("hash"));
}

#[test]
fn user_row_role_is_plain_string() {
    let json = serde_json::to_value(sample_user()).unwrap();
    assert_eq!(json["role"], "USER");
}

// =============================================================================
// UpdateUser
// =============================================================================

#[test]
fn update_user_default_changes_nothing() {
    let update = UpdateUser::default();
    assert!(update.name.is_none());
    assert!(update.email.is_none());
    assert!(update.address.is_none());
    assert!(update.date_of_birth.is_none());
    assert!(update.aadhaar_number.is_none());
    assert!(update.pan_number.is_none());
}

// =============================================================================
// UserError
// =============================================================================

#[test]
fn user_error_not_found_names_the_id() {
    let id = Uuid::nil();
    let err = UserError::NotFound(id);
    assert!(err.to_string().contains(&id.to_string()));
}
