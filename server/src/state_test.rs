use super::test_helpers::test_app_state;
use crate::services::auth::Role;
use crate::services::token;

#[tokio::test]
async fn test_app_state_tokens_round_trip() {
    let state = test_app_state();
    let jwt = token::issue(&state.tokens, "john.doe@example.com", Role::User).unwrap();
    let identity = token::verify(&state.tokens, &jwt).unwrap();
    assert_eq!(identity.email, "john.doe@example.com");
    assert_eq!(identity.role, Role::User);
}

#[tokio::test]
async fn test_app_state_is_cheap_to_clone() {
    let state = test_app_state();
    let cloned = state.clone();
    let jwt = token::issue(&cloned.tokens, "a@b.com", Role::Admin).unwrap();
    assert!(token::verify(&state.tokens, &jwt).is_ok());
}
