use super::*;
use crate::services::officer::OfficerError;

#[test]
fn officer_error_to_status_mapping() {
    assert_eq!(officer_error_to_status(OfficerError::NotFound(Uuid::new_v4())), StatusCode::NOT_FOUND);
    assert_eq!(
        officer_error_to_status(OfficerError::Db(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
