use super::*;
use crate::services::user::UserError;

#[test]
fn user_error_to_status_mapping() {
    assert_eq!(user_error_to_status(UserError::NotFound(Uuid::new_v4())), StatusCode::NOT_FOUND);
    assert_eq!(user_error_to_status(UserError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(user_error_to_status(UserError::InvalidDate), StatusCode::BAD_REQUEST);
    assert_eq!(user_error_to_status(UserError::EmailExists), StatusCode::BAD_REQUEST);
    assert_eq!(
        user_error_to_status(UserError::Db(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn update_body_accepts_partial_camel_case() {
    let body: UpdateUserBody =
        serde_json::from_str(r#"{"address":"456 Oak Avenue","panNumber":"FGHIJ5678K"}"#).unwrap();
    assert_eq!(body.address.as_deref(), Some("456 Oak Avenue"));
    assert_eq!(body.pan_number.as_deref(), Some("FGHIJ5678K"));
    assert!(body.name.is_none());
    assert!(body.email.is_none());
    assert!(body.date_of_birth.is_none());
    assert!(body.aadhaar_number.is_none());
}

#[test]
fn update_body_empty_object_is_all_none() {
    let body: UpdateUserBody = serde_json::from_str("{}").unwrap();
    assert!(body.name.is_none());
    assert!(body.aadhaar_number.is_none());
}
