use super::*;

// =============================================================================
// generate_transaction_id
// =============================================================================

#[test]
fn transaction_id_starts_with_txn() {
    assert!(generate_transaction_id().starts_with("TXN"));
}

#[test]
fn transaction_id_is_all_digits_after_prefix() {
    let id = generate_transaction_id();
    assert!(id["TXN".len()..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn transaction_id_length_covers_millis_and_suffix() {
    // 13 epoch-millis digits plus a 4-digit suffix.
    let id = generate_transaction_id();
    assert_eq!(id.len(), "TXN".len() + 13 + 4);
}

#[test]
fn transaction_id_two_calls_differ() {
    assert_ne!(generate_transaction_id(), generate_transaction_id());
}

// =============================================================================
// PaymentRow serialization
// =============================================================================

#[test]
fn payment_row_serializes_camel_case() {
    let row = PaymentRow {
        id: Uuid::nil(),
        user_id: Uuid::nil(),
        proposal_id: Uuid::nil(),
        amount: 7500.0,
        method: "card".into(),
        transaction_id: "TXN17000000000001234".into(),
        paid_on: "2024-05-01".into(),
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["userId"], Uuid::nil().to_string());
    assert_eq!(json["proposalId"], Uuid::nil().to_string());
    assert_eq!(json["transactionId"], "TXN17000000000001234");
    assert_eq!(json["paidOn"], "2024-05-01");
    assert_eq!(json["amount"], 7500.0);
}

// =============================================================================
// PaymentError
// =============================================================================

#[test]
fn payment_error_already_paid_names_the_id() {
    let id = Uuid::nil();
    assert!(PaymentError::AlreadyPaid(id).to_string().contains(&id.to_string()));
}
