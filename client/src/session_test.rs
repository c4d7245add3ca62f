use super::*;
use uuid::Uuid;

fn temp_session_path() -> PathBuf {
    std::env::temp_dir().join(format!("autosure-session-test-{}.json", Uuid::new_v4()))
}

#[test]
fn fresh_session_is_unauthenticated() {
    let session = Session::new();
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert!(session.email().is_none());
    assert!(session.role().is_none());
    assert!(session.bearer_header().is_none());
}

#[test]
fn log_in_then_log_out_round_trip() {
    let mut session = Session::new();
    session.log_in("jwt-token".to_owned(), "john.doe@example.com".to_owned(), Role::User);

    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("jwt-token"));
    assert_eq!(session.email(), Some("john.doe@example.com"));
    assert_eq!(session.role(), Some(Role::User));
    assert_eq!(session.bearer_header().as_deref(), Some("Bearer jwt-token"));

    session.log_out();
    assert!(!session.is_authenticated());
    assert!(session.bearer_header().is_none());
}

#[test]
fn has_role_follows_ladder() {
    let mut session = Session::new();
    assert!(!session.has_role(Role::User));

    session.log_in("t".to_owned(), "o@insurance.com".to_owned(), Role::Officer);
    assert!(session.has_role(Role::User));
    assert!(session.has_role(Role::Officer));
    assert!(!session.has_role(Role::Admin));

    session.log_in("t".to_owned(), "a@insurance.com".to_owned(), Role::Admin);
    assert!(session.has_role(Role::Admin));
}

#[test]
fn save_and_load_round_trip() {
    let path = temp_session_path();
    let mut session = Session::new();
    session.log_in("persisted-token".to_owned(), "jane.smith@example.com".to_owned(), Role::User);
    session.save(&path).unwrap();

    let loaded = Session::load(&path).unwrap();
    assert_eq!(loaded.token(), Some("persisted-token"));
    assert_eq!(loaded.email(), Some("jane.smith@example.com"));
    assert_eq!(loaded.role(), Some(Role::User));

    Session::remove(&path).unwrap();
    assert!(!path.exists());
}

#[test]
fn load_missing_file_is_empty_session() {
    let path = temp_session_path();
    let session = Session::load(&path).unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn remove_missing_file_is_ok() {
    let path = temp_session_path();
    assert!(Session::remove(&path).is_ok());
}

#[test]
fn load_rejects_garbage_file() {
    let path = temp_session_path();
    fs::write(&path, "not json at all").unwrap();
    assert!(Session::load(&path).is_err());
    Session::remove(&path).unwrap();
}

#[test]
fn default_path_ends_with_app_file() {
    let path = Session::default_path();
    assert!(path.ends_with("autosure/session.json"));
}
