use super::*;

#[test]
fn stats_serialize_with_dashboard_widget_keys() {
    let stats = DashboardStats {
        pending_claims: 3,
        under_review_claims: 1,
        approved_claims: 5,
        rejected_claims: 2,
        total_proposals_reviewed: 11,
        active_policies: 7,
        total_premium: 45_500.0,
        registered_users: 9,
    };

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["pendingClaims"], 3);
    assert_eq!(value["underReviewClaims"], 1);
    assert_eq!(value["approvedClaims"], 5);
    assert_eq!(value["rejectedClaims"], 2);
    assert_eq!(value["totalProposalsReviewed"], 11);
    assert_eq!(value["activePolicies"], 7);
    assert_eq!(value["totalPremium"], 45_500.0);
    assert_eq!(value["registeredUsers"], 9);
}

#[test]
fn dashboard_query_failed_maps_to_500() {
    assert_eq!(dashboard_query_failed(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR);
}
