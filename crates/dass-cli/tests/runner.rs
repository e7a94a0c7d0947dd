use std::io::Cursor;

use dass_core::models::assessment::{AssessmentResult, Severity};
use dass_core::models::session::SurveySession;
use dass_instruments::Dass21;

use dass_cli::runner::run_survey;

fn answers(values: &[&str]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}

fn run(script: &str, name: Option<&str>) -> (eyre::Result<Option<AssessmentResult>>, String) {
    let mut session = SurveySession::new();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = run_survey(&Dass21, &mut session, name, &mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn completes_and_scores_with_prompted_name() {
    let mut script = answers(&["1"; 7]);
    script.push_str(&answers(&["0"; 14]));
    script.push_str("  Ada \n");

    let (result, transcript) = run(&script, None);
    let result = result.unwrap().unwrap();

    assert_eq!(result.display_name.as_deref(), Some("Ada"));
    let scores: Vec<_> = result.results.iter().map(|r| (r.score, r.severity)).collect();
    assert_eq!(
        scores,
        vec![(14, Severity::Moderate), (0, Severity::Normal), (0, Severity::Normal)]
    );
    assert!(
        transcript.contains("Q1 of 21: I couldn't seem to experience any positive feeling at all.")
    );
    assert!(transcript.contains("Q21 of 21: I felt that I was rather touchy."));
    assert!(transcript.contains("[3] Applied to me very much, or most of the time"));
    assert!(transcript.contains("Your name (optional):"));
}

#[test]
fn invalid_answers_are_reprompted() {
    let mut script = answers(&["7", "yes", ""]);
    script.push_str(&answers(&["3"; 21]));

    let (result, transcript) = run(&script, Some("Bo"));
    let result = result.unwrap().unwrap();

    assert_eq!(transcript.matches("Please answer 0, 1, 2 or 3").count(), 3);
    assert!(!transcript.contains("Your name"));
    assert_eq!(result.display_name.as_deref(), Some("Bo"));
    assert!(result.results.iter().all(|r| r.severity == Severity::ExtremelySevere));
}

#[test]
fn restart_discards_earlier_answers() {
    let mut script = answers(&["3", "3", "r"]);
    script.push_str(&answers(&["0"; 21]));
    script.push('\n');

    let (result, transcript) = run(&script, None);
    let result = result.unwrap().unwrap();

    assert!(transcript.contains("Restarting from the first question."));
    assert!(result.display_name.is_none());
    assert!(result.results.iter().all(|r| r.score == 0));
}

#[test]
fn quit_returns_nothing() {
    let (result, _) = run(&answers(&["1", "2", "q"]), None);
    assert!(result.unwrap().is_none());
}

#[test]
fn early_end_of_input_is_an_error() {
    let (result, _) = run(&answers(&["1"; 5]), None);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("after 5 of 21 answers"));
}
