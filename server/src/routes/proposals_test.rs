use super::*;

#[test]
fn proposal_error_to_status_mapping() {
    assert_eq!(
        proposal_error_to_status(ProposalError::UserNotFound(Uuid::new_v4())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(proposal_error_to_status(ProposalError::NotFound(Uuid::new_v4())), StatusCode::NOT_FOUND);
    assert_eq!(
        proposal_error_to_status(ProposalError::UnknownVehicle("rocket".to_owned())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        proposal_error_to_status(ProposalError::UnknownPackage("platinum".to_owned())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        proposal_error_to_status(ProposalError::Db(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn submit_body_accepts_enrollment_form_shape() {
    let body: SubmitProposalBody = serde_json::from_str(
        r#"{
            "vehicleType": "Car",
            "vehicleNumber": "MH01AB1234",
            "policyPackage": "Comprehensive Plus",
            "premiumAmount": 8000
        }"#,
    )
    .unwrap();
    assert_eq!(body.vehicle_type, "Car");
    assert_eq!(body.vehicle_number, "MH01AB1234");
    assert_eq!(body.policy_package, "Comprehensive Plus");
    // The client-side amount is carried but never trusted.
    assert_eq!(body.premium_amount, Some(8000.0));
}

#[test]
fn submit_body_premium_is_optional() {
    let body: SubmitProposalBody = serde_json::from_str(
        r#"{"vehicleType":"Truck","vehicleNumber":"KA05XY9999","policyPackage":"basic"}"#,
    )
    .unwrap();
    assert!(body.premium_amount.is_none());
}

#[test]
fn unknown_term_errors_render_as_plain_text() {
    let err = ProposalError::UnknownVehicle("rocket".to_owned());
    assert_eq!(err.to_string(), "unknown vehicle type: rocket");
    let err = ProposalError::UnknownPackage("platinum".to_owned());
    assert_eq!(err.to_string(), "unknown policy package: platinum");
}
