use super::*;

fn sample_officer() -> OfficerRow {
    OfficerRow {
        id: Uuid::nil(),
        name: "Michael Johnson".into(),
        email: "officer1@insurance.com".into(),
        role: "OFFICER".into(),
        created_at: "2024-01-01".into(),
    }
}

#[test]
fn officer_row_serializes_camel_case() {
    let json = serde_json::to_value(sample_officer()).unwrap();
    assert_eq!(json["name"], "Michael Johnson");
    assert_eq!(json["createdAt"], "2024-01-01");
    assert_eq!(json["role"], "OFFICER");
}

#[test]
fn officer_row_never_carries_password_fields() {
    let json = serde_json::to_string(&sample_officer()).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("salt"));
}

#[test]
fn officer_error_not_found_names_the_id() {
    let id = Uuid::nil();
    assert!(OfficerError::NotFound(id).to_string().contains(&id.to_string()));
}
