use super::*;
use axum::http::Uri;

#[test]
fn process_body_accepts_camel_case() {
    let id = Uuid::new_v4();
    let body: ProcessPaymentBody =
        serde_json::from_str(&format!(r#"{{"proposalId":"{id}","method":"upi"}}"#)).unwrap();
    assert_eq!(body.proposal_id, id);
    assert_eq!(body.method.as_deref(), Some("upi"));
}

#[test]
fn process_body_method_is_optional() {
    let id = Uuid::new_v4();
    let body: ProcessPaymentBody = serde_json::from_str(&format!(r#"{{"proposalId":"{id}"}}"#)).unwrap();
    assert!(body.method.is_none());
}

#[test]
fn file_claim_query_parses_from_uri() {
    let user_id = Uuid::new_v4();
    let proposal_id = Uuid::new_v4();
    let uri: Uri = format!(
        "/api/payments/claim?userId={user_id}&proposalId={proposal_id}&reason=Accident%20damage"
    )
    .parse()
    .unwrap();

    let Query(query) = Query::<FileClaimQuery>::try_from_uri(&uri).unwrap();
    assert_eq!(query.user_id, user_id);
    assert_eq!(query.proposal_id, proposal_id);
    assert_eq!(query.reason, "Accident damage");
}

#[test]
fn file_claim_query_requires_all_params() {
    let uri: Uri = "/api/payments/claim?reason=hail".parse().unwrap();
    assert!(Query::<FileClaimQuery>::try_from_uri(&uri).is_err());
}

#[test]
fn claim_status_query_parses_from_uri() {
    let uri: Uri = "/api/payments/claim/abc/status?status=APPROVED".parse().unwrap();
    let Query(query) = Query::<ClaimStatusQuery>::try_from_uri(&uri).unwrap();
    assert_eq!(query.status, "APPROVED");
}

// =============================================================================
// Error mapping
// =============================================================================

#[test]
fn payment_errors_map_to_statuses() {
    let id = Uuid::new_v4();
    assert_eq!(payment_error_response(&PaymentError::ProposalNotFound(id)).status(), StatusCode::NOT_FOUND);
    assert_eq!(payment_error_response(&PaymentError::AlreadyPaid(id)).status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        payment_error_response(&PaymentError::Db(sqlx::Error::RowNotFound)).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn claim_errors_map_to_statuses() {
    let id = Uuid::new_v4();
    assert_eq!(claim_error_response(&ClaimError::NotFound(id)).status(), StatusCode::NOT_FOUND);
    assert_eq!(claim_error_response(&ClaimError::ProposalNotFound(id)).status(), StatusCode::NOT_FOUND);
    assert_eq!(claim_error_response(&ClaimError::ProposalNotActive(id)).status(), StatusCode::BAD_REQUEST);
    assert_eq!(claim_error_response(&ClaimError::EmptyReason).status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        claim_error_response(&ClaimError::UnknownStatus("SETTLED".to_owned())).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        claim_error_response(&ClaimError::Db(sqlx::Error::RowNotFound)).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
