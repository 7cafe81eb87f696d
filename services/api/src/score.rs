use clap::Args;
use std::fmt::Write as _;
use tizhi::config::AppConfig;
use tizhi::constitution::questionnaire::{answer_label, ANSWER_LABELS};
use tizhi::constitution::{ClassificationResult, ConstitutionScorer, ConstitutionType, QUESTIONS};
use tizhi::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Thirty ratings from 1 to 5, separated by commas or spaces
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: Answers,
    /// Print the classification as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Answers(pub(crate) Vec<i32>);

pub(crate) fn parse_answers(raw: &str) -> Result<Answers, String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|err| format!("failed to parse answer '{token}' ({err})"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Answers)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let scorer = ConstitutionScorer::new(config.scoring);
    let result = scorer.analyze(&args.answers.0)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_classification(&result));
    }
    Ok(())
}

pub(crate) fn run_questions() {
    print!("{}", render_questionnaire());
}

pub(crate) fn render_classification(result: &ClassificationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Primary constitution: {} ({})",
        result.primary_constitution_name, result.primary_constitution
    );

    if result.secondary_constitutions.is_empty() {
        let _ = writeln!(out, "Secondary constitutions: none");
    } else {
        let _ = writeln!(out, "Secondary constitutions");
        for entry in &result.secondary_constitutions {
            let _ = writeln!(out, "- {} ({}): {:.2}", entry.name, entry.kind, entry.score);
        }
    }

    let _ = writeln!(out, "\nScores");
    for kind in ConstitutionType::ALL {
        if let Some(score) = result.scores.get(&kind) {
            let _ = writeln!(out, "- {}: {:.1}", kind.display_name(), score);
        }
    }
    out
}

pub(crate) fn render_questionnaire() -> String {
    let mut out = String::new();
    let scale: Vec<String> = (1..=ANSWER_LABELS.len() as i32)
        .filter_map(|rating| answer_label(rating).map(|label| format!("{rating}={label}")))
        .collect();
    let _ = writeln!(out, "Answer scale: {}", scale.join(", "));

    let mut current = None;
    for question in QUESTIONS.iter() {
        if current != Some(question.constitution_type) {
            current = Some(question.constitution_type);
            let _ = writeln!(out, "\n{}", question.constitution_type.display_name());
        }
        let _ = writeln!(out, "{:>2}. {}", question.number, question.content);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_space_separated_answers() {
        let Answers(values) = parse_answers("1,2, 3 4,,5").expect("parses");
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert!(parse_answers("1,x").is_err());
    }

    #[test]
    fn renders_primary_and_secondaries() {
        let mut answers = vec![3; 30];
        answers[8..12].fill(5);
        let result = ConstitutionScorer::default()
            .analyze(&answers)
            .expect("valid answers");

        let text = render_classification(&result);

        assert!(text.starts_with("Primary constitution: 阳虚质 (yang_deficiency)"));
        assert!(text.contains("- 平和质 (peace): 30.00"));
        assert!(text.contains("- 特禀质: 15.0"));
    }

    #[test]
    fn questionnaire_lists_every_item_under_its_group() {
        let text = render_questionnaire();
        assert!(text.contains("1=没有"));
        assert!(text.contains("\n特禀质\n29. "));
        assert_eq!(text.matches(". 您").count(), 30);
    }
}
