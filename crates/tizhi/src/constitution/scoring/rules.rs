use super::super::questionnaire::{
    constitution_for_question, ANSWER_MAX, ANSWER_MIN, QUESTION_COUNT,
};
use super::super::types::ConstitutionType;
use super::config::{ScoringConfig, MAX_PERCENTAGE};
use super::{PercentageScoreMap, RawScoreMap};

/// Rejection raised while validating a questionnaire answer set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("expected {expected} answers, got {actual}")]
    WrongAnswerCount { expected: usize, actual: usize },
    #[error("answer at position {position} must be between 1 and 5, got {value}")]
    AnswerOutOfRange { position: usize, value: i32 },
}

pub(crate) fn calculate_scores(answers: &[i32]) -> Result<RawScoreMap, ValidationError> {
    if answers.len() != QUESTION_COUNT {
        return Err(ValidationError::WrongAnswerCount {
            expected: QUESTION_COUNT,
            actual: answers.len(),
        });
    }

    if let Some((index, value)) = answers
        .iter()
        .enumerate()
        .find(|(_, value)| !(ANSWER_MIN..=ANSWER_MAX).contains(*value))
    {
        return Err(ValidationError::AnswerOutOfRange {
            position: index + 1,
            value: *value,
        });
    }

    let mut raw_scores: RawScoreMap = ConstitutionType::ALL
        .into_iter()
        .map(|kind| (kind, 0))
        .collect();

    for (index, answer) in answers.iter().enumerate() {
        if let Some(kind) = constitution_for_question(index + 1) {
            // Range was checked above, so the rating is positive.
            *raw_scores.entry(kind).or_default() += answer.unsigned_abs();
        }
    }

    Ok(raw_scores)
}

pub(crate) fn convert_to_percentage(
    raw_scores: &RawScoreMap,
    config: &ScoringConfig,
) -> PercentageScoreMap {
    raw_scores
        .iter()
        .map(|(kind, raw)| {
            let scaled = f64::from(*raw) * config.score_convert_factor;
            (*kind, scaled.min(MAX_PERCENTAGE))
        })
        .collect()
}
