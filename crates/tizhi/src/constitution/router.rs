use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ResultId, TestSubmission};
use super::profile::{all_profiles, Characteristics, RegulationPrinciples};
use super::questionnaire::{Question, ANSWER_LABELS, QUESTIONS};
use super::repository::{RepositoryError, ResultRepository};
use super::scoring::{PercentageScoreMap, SecondaryConstitution};
use super::service::{ConstitutionService, ResultServiceError};
use super::types::ConstitutionType;

const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Router builder exposing questionnaire, scoring, and result endpoints.
pub fn constitution_router<R>(service: Arc<ConstitutionService<R>>) -> Router
where
    R: ResultRepository + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/test/submit", post(submit_handler::<R>))
        .route("/api/v1/result/:result_id", get(result_handler::<R>))
        .route("/api/v1/users/:user_id/results", get(history_handler::<R>))
        .route("/api/v1/constitutions", get(profiles_handler))
        .route("/api/v1/constitutions/:code", get(profile_handler))
        .with_state(service)
}

/// Uniform response envelope; `code` is 0 on success.
#[derive(Debug, Serialize)]
struct Envelope<T> {
    code: i32,
    message: &'static str,
    data: T,
}

fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    let body = Envelope {
        code: 0,
        message: "success",
        data,
    };
    (status, Json(body)).into_response()
}

fn failure(status: StatusCode, message: &str, detail: String) -> Response {
    let body = json!({
        "code": -1,
        "message": message,
        "detail": detail,
    });
    (status, Json(body)).into_response()
}

fn service_failure(error: ResultServiceError) -> Response {
    match error {
        ResultServiceError::Validation(error) => {
            failure(StatusCode::BAD_REQUEST, "invalid answers", error.to_string())
        }
        ResultServiceError::Repository(RepositoryError::NotFound) => failure(
            StatusCode::NOT_FOUND,
            "result not found",
            RepositoryError::NotFound.to_string(),
        ),
        ResultServiceError::Repository(RepositoryError::Conflict) => failure(
            StatusCode::CONFLICT,
            "result already exists",
            RepositoryError::Conflict.to_string(),
        ),
        other => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error",
            other.to_string(),
        ),
    }
}

#[derive(Debug, Serialize)]
struct QuestionView {
    #[serde(flatten)]
    question: Question,
    options: BTreeMap<String, &'static str>,
}

#[derive(Debug, Serialize)]
struct QuestionnaireView {
    total: usize,
    questions: Vec<QuestionView>,
}

pub(crate) async fn questions_handler() -> Response {
    let options: BTreeMap<String, &'static str> = ANSWER_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| ((index + 1).to_string(), *label))
        .collect();

    let questions: Vec<QuestionView> = QUESTIONS
        .iter()
        .map(|question| QuestionView {
            question: *question,
            options: options.clone(),
        })
        .collect();

    success(
        StatusCode::OK,
        QuestionnaireView {
            total: questions.len(),
            questions,
        },
    )
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ConstitutionService<R>>>,
    Json(submission): Json<TestSubmission>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => success(StatusCode::OK, record.submit_view()),
        Err(error) => service_failure(error),
    }
}

#[derive(Debug, Serialize)]
struct ResultDetailView {
    result_id: ResultId,
    user_id: Option<String>,
    primary_constitution: ConstitutionType,
    primary_constitution_name: String,
    secondary_constitutions: Vec<SecondaryConstitution>,
    scores: PercentageScoreMap,
    description: &'static str,
    characteristics: Characteristics,
    regulation_principles: RegulationPrinciples,
    created_at: DateTime<Utc>,
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<ConstitutionService<R>>>,
    Path(result_id): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let record = match service.get(&ResultId(result_id)) {
        Ok(record) => record,
        Err(error) => return service_failure(error),
    };

    let profile = record.classification.primary_constitution.profile();
    let classification = record.classification;
    success(
        StatusCode::OK,
        ResultDetailView {
            result_id: record.result_id,
            user_id: record.user_id,
            primary_constitution: classification.primary_constitution,
            primary_constitution_name: classification.primary_constitution_name,
            secondary_constitutions: classification.secondary_constitutions,
            scores: classification.scores,
            description: profile.description,
            characteristics: profile.characteristics,
            regulation_principles: profile.regulation_principles,
            created_at: record.created_at,
        },
    )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryQuery {
    limit: Option<usize>,
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<ConstitutionService<R>>>,
    Path(user_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    match service.history(&user_id, limit) {
        Ok(records) => {
            let results: Vec<_> = records.iter().map(|record| record.summary_view()).collect();
            success(
                StatusCode::OK,
                json!({
                    "user_id": user_id,
                    "total": results.len(),
                    "results": results,
                }),
            )
        }
        Err(error) => service_failure(error),
    }
}

pub(crate) async fn profiles_handler() -> Response {
    success(StatusCode::OK, all_profiles())
}

pub(crate) async fn profile_handler(Path(code): Path<String>) -> Response {
    match code.parse::<ConstitutionType>() {
        Ok(kind) => success(StatusCode::OK, kind.profile()),
        Err(error) => failure(
            StatusCode::NOT_FOUND,
            "constitution not found",
            error.to_string(),
        ),
    }
}
