use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_ladder_ordering() {
    assert!(Role::User < Role::Officer);
    assert!(Role::Officer < Role::Admin);
    assert!(Role::Admin.satisfies(Role::User));
    assert!(Role::Officer.satisfies(Role::Officer));
    assert!(!Role::User.satisfies(Role::Officer));
}

#[test]
fn role_parses_case_insensitively() {
    assert_eq!(Role::from_str("admin"), Some(Role::Admin));
    assert_eq!(Role::from_str(" Officer "), Some(Role::Officer));
    assert_eq!(Role::from_str("customer"), None);
}

#[test]
fn role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Role::Officer).unwrap(), r#""OFFICER""#);
    let parsed: Role = serde_json::from_str(r#""ADMIN""#).unwrap();
    assert_eq!(parsed, Role::Admin);
}

// =============================================================================
// Statuses
// =============================================================================

#[test]
fn proposal_status_wire_names() {
    assert_eq!(serde_json::to_string(&ProposalStatus::ProposalSubmitted).unwrap(), r#""PROPOSAL_SUBMITTED""#);
    assert_eq!(serde_json::to_string(&ProposalStatus::Active).unwrap(), r#""ACTIVE""#);
}

#[test]
fn claim_status_wire_names() {
    assert_eq!(serde_json::to_string(&ClaimStatus::UnderReview).unwrap(), r#""UNDER_REVIEW""#);
    assert_eq!(ClaimStatus::from_str("under_review"), Some(ClaimStatus::UnderReview));
    assert_eq!(ClaimStatus::from_str("settled"), None);
    assert_eq!(ClaimStatus::Approved.as_str(), "APPROVED");
}

// =============================================================================
// Response decoding
// =============================================================================

#[test]
fn proposal_decodes_server_shape() {
    let proposal: Proposal = serde_json::from_str(
        r#"{
            "id": "7b0f7ba0-9c5c-4f8e-9a76-92d4f4f7a001",
            "userId": "7b0f7ba0-9c5c-4f8e-9a76-92d4f4f7a002",
            "vehicleType": "Car",
            "vehicleNumber": "MH01AB1234",
            "policyPackage": "Comprehensive",
            "premiumAmount": 6500.0,
            "status": "ACTIVE",
            "submissionDate": "2025-01-10",
            "paymentDate": "2025-01-12",
            "transactionId": "TXN17366400000001234"
        }"#,
    )
    .unwrap();
    assert_eq!(proposal.vehicle_type, "Car");
    assert_eq!(proposal.status, ProposalStatus::Active);
    assert_eq!(proposal.premium_amount, 6500.0);
    assert_eq!(proposal.payment_date.as_deref(), Some("2025-01-12"));
}

#[test]
fn proposal_decodes_unpaid_shape() {
    let proposal: Proposal = serde_json::from_str(
        r#"{
            "id": "7b0f7ba0-9c5c-4f8e-9a76-92d4f4f7a001",
            "userId": "7b0f7ba0-9c5c-4f8e-9a76-92d4f4f7a002",
            "vehicleType": "Truck",
            "vehicleNumber": "KA05XY9999",
            "policyPackage": "basic",
            "premiumAmount": 11000.0,
            "status": "PROPOSAL_SUBMITTED",
            "submissionDate": "2025-01-10",
            "paymentDate": null,
            "transactionId": null
        }"#,
    )
    .unwrap();
    assert_eq!(proposal.status, ProposalStatus::ProposalSubmitted);
    assert!(proposal.payment_date.is_none());
    assert!(proposal.transaction_id.is_none());
}

#[test]
fn user_decodes_with_role() {
    let user: User = serde_json::from_str(
        r#"{
            "id": "7b0f7ba0-9c5c-4f8e-9a76-92d4f4f7a003",
            "name": "John Doe",
            "email": "john.doe@example.com",
            "address": "123 Main Street",
            "dateOfBirth": "1990-05-15",
            "aadhaarNumber": "123456789012",
            "panNumber": "ABCDE1234F",
            "role": "USER",
            "createdAt": "2025-01-01"
        }"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.date_of_birth, "1990-05-15");
}

#[test]
fn dashboard_stats_decode_camel_case() {
    let stats: DashboardStats = serde_json::from_str(
        r#"{
            "pendingClaims": 2,
            "underReviewClaims": 1,
            "approvedClaims": 4,
            "rejectedClaims": 0,
            "totalProposalsReviewed": 9,
            "activePolicies": 6,
            "totalPremium": 39500.0,
            "registeredUsers": 8
        }"#,
    )
    .unwrap();
    assert_eq!(stats.under_review_claims, 1);
    assert_eq!(stats.total_premium, 39500.0);
}

// =============================================================================
// Request encoding
// =============================================================================

#[test]
fn login_request_sends_camel_case_user_type() {
    let body = LoginRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        user_type: Role::Officer,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["userType"], "OFFICER");
    assert_eq!(value["email"], "a@b.com");
}

#[test]
fn new_user_sends_camel_case_fields() {
    let body = NewUser {
        name: "John Doe".to_owned(),
        email: "john.doe@example.com".to_owned(),
        password: "Password123!".to_owned(),
        address: "123 Main Street".to_owned(),
        date_of_birth: "1990-05-15".to_owned(),
        aadhaar_number: "123456789012".to_owned(),
        pan_number: "ABCDE1234F".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["dateOfBirth"], "1990-05-15");
    assert_eq!(value["aadhaarNumber"], "123456789012");
    assert_eq!(value["panNumber"], "ABCDE1234F");
}

#[test]
fn update_user_skips_unset_fields() {
    let update = UpdateUser { address: Some("456 Oak Avenue".to_owned()), ..UpdateUser::default() };
    let value = serde_json::to_value(&update).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(value["address"], "456 Oak Avenue");
}
