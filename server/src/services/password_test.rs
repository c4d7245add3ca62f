use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_salt
// =============================================================================

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_salt_two_calls_differ() {
    assert_ne!(generate_salt(), generate_salt());
}

// =============================================================================
// hash_password / verify_password
// =============================================================================

#[test]
fn hash_password_is_sha256_hex() {
    let hash = hash_password("hunter2", "00ff");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn hash_password_is_deterministic() {
    assert_eq!(hash_password("secret", "abcd"), hash_password("secret", "abcd"));
}

#[test]
fn hash_password_salt_changes_digest() {
    assert_ne!(hash_password("secret", "abcd"), hash_password("secret", "dcba"));
}

#[test]
fn hash_password_password_changes_digest() {
    assert_ne!(hash_password("secret", "abcd"), hash_password("secre7", "abcd"));
}

#[test]
fn verify_password_accepts_correct_password() {
    let salt = generate_salt();
    let hash = hash_password("TestPassword123!", &salt);
    assert!(verify_password("TestPassword123!", &salt, &hash));
}

#[test]
fn verify_password_rejects_wrong_password() {
    let salt = generate_salt();
    let hash = hash_password("TestPassword123!", &salt);
    assert!(!verify_password("TestPassword124!", &salt, &hash));
}

#[test]
fn verify_password_rejects_wrong_salt() {
    let hash = hash_password("TestPassword123!", "aaaa");
    assert!(!verify_password("TestPassword123!", "bbbb", &hash));
}
