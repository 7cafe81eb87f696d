use std::sync::Arc;

use super::common::*;
use crate::constitution::domain::{ResultId, TestSubmission};
use crate::constitution::repository::RepositoryError;
use crate::constitution::types::ConstitutionType;
use crate::constitution::{ConstitutionService, ResultServiceError, ValidationError};

#[test]
fn submit_scores_and_stores_result() {
    let (service, repository) = build_service();

    let record = service
        .submit(submission_for("user-1", block_answers(9..=12, 5, 3)))
        .expect("submission succeeds");

    assert!(record.result_id.as_str().starts_with("res-"));
    assert_eq!(record.user_id.as_deref(), Some("user-1"));
    assert_eq!(record.platform.as_deref(), Some("h5"));
    assert_eq!(
        record.classification.primary_constitution,
        ConstitutionType::YangDeficiency
    );
    assert_eq!(record.report_url(), format!("/api/v1/result/{}", record.result_id.0));
    assert_eq!(repository.len(), 1);

    let fetched = service.get(&record.result_id).expect("stored result");
    assert_eq!(fetched, record);
}

#[test]
fn submit_rejects_invalid_answers_without_storing() {
    let (service, repository) = build_service();

    let err = service
        .submit(TestSubmission::anonymous(vec![3; 29]))
        .expect_err("29 answers are rejected");

    assert!(matches!(
        err,
        ResultServiceError::Validation(ValidationError::WrongAnswerCount { actual: 29, .. })
    ));
    assert_eq!(repository.len(), 0);
}

#[test]
fn get_reports_missing_results() {
    let (service, _) = build_service();

    let err = service
        .get(&ResultId("res-missing".to_string()))
        .expect_err("unknown id");

    assert!(matches!(
        err,
        ResultServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn history_is_scoped_to_user_and_limited() {
    let (service, _) = build_service();
    for _ in 0..3 {
        service
            .submit(submission_for("user-7", uniform_answers(3)))
            .expect("submission succeeds");
    }
    service
        .submit(submission_for("user-8", uniform_answers(4)))
        .expect("submission succeeds");

    let history = service.history("user-7", 2).expect("history loads");

    assert_eq!(history.len(), 2);
    assert!(history
        .iter()
        .all(|record| record.user_id.as_deref() == Some("user-7")));
    assert!(history[0].created_at >= history[1].created_at);
}

#[test]
fn repository_failures_surface_as_service_errors() {
    let service = ConstitutionService::new(Arc::new(UnavailableRepository), scorer());

    let err = service
        .submit(TestSubmission::anonymous(uniform_answers(2)))
        .expect_err("repository offline");

    assert!(matches!(
        err,
        ResultServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}
