use super::super::types::ConstitutionType;
use super::config::{ScoringConfig, PEACE_OTHERS_CEILING};
use super::{ClassificationResult, PercentageScoreMap, SecondaryConstitution};

const MAX_SECONDARY: usize = 3;

/// Round half up to two decimals for display scores.
pub(crate) fn round_score(score: f64) -> f64 {
    (score * 100.0 + 0.5).floor() / 100.0
}

fn candidate(kind: ConstitutionType, score: f64) -> SecondaryConstitution {
    SecondaryConstitution {
        kind,
        name: kind.display_name().to_string(),
        score: round_score(score),
    }
}

fn peace_dominates(scores: &PercentageScoreMap, config: &ScoringConfig) -> bool {
    let peace = scores
        .get(&ConstitutionType::Peace)
        .copied()
        .unwrap_or(0.0);

    peace >= config.threshold_peace
        && scores
            .iter()
            .filter(|(kind, _)| **kind != ConstitutionType::Peace)
            .all(|(_, score)| *score < PEACE_OTHERS_CEILING)
}

/// Highest score across all nine constitutions; earlier declarations win ties.
fn highest_scoring(scores: &PercentageScoreMap) -> (ConstitutionType, f64) {
    let score_of = |kind: ConstitutionType| scores.get(&kind).copied().unwrap_or(0.0);

    ConstitutionType::ALL.into_iter().skip(1).fold(
        (ConstitutionType::ALL[0], score_of(ConstitutionType::ALL[0])),
        |best, kind| {
            let score = score_of(kind);
            if score > best.1 {
                (kind, score)
            } else {
                best
            }
        },
    )
}

pub(crate) fn determine_constitution(
    scores: &PercentageScoreMap,
    config: &ScoringConfig,
) -> ClassificationResult {
    let mut eligible = Vec::new();
    let mut primary: Option<(ConstitutionType, f64)> = None;

    for (kind, score) in scores {
        if *score >= config.threshold_secondary {
            eligible.push(candidate(*kind, *score));
            if primary.map_or(true, |(_, best)| *score > best) {
                primary = Some((*kind, *score));
            }
        }
    }

    if peace_dominates(scores, config) {
        return ClassificationResult::new(ConstitutionType::Peace, Vec::new(), scores.clone());
    }

    // With no eligible candidate the fallback primary is the only candidate, so no secondaries.
    let primary = match primary {
        Some((kind, _)) => kind,
        None => highest_scoring(scores).0,
    };

    let mut secondary: Vec<SecondaryConstitution> = eligible
        .into_iter()
        .filter(|entry| entry.kind != primary)
        .collect();
    secondary.sort_by(|left, right| right.score.total_cmp(&left.score));
    secondary.truncate(MAX_SECONDARY);

    ClassificationResult::new(primary, secondary, scores.clone())
}
