use dass_core::models::session::SurveySession;
use dass_instruments::Instrument;

use dass_cli::output::{ReportOptions, emit};
use dass_cli::runner::run_survey;

/// Run the questionnaire interactively. Prompts go to stderr so that
/// stdout carries only the results.
pub fn execute(
    instrument: &dyn Instrument,
    name: Option<&str>,
    options: &ReportOptions,
) -> eyre::Result<()> {
    let mut session = SurveySession::new();
    tracing::info!(session = %session.id(), "survey started");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompts = std::io::stderr();

    let Some(result) = run_survey(instrument, &mut session, name, &mut input, &mut prompts)? else {
        eprintln!("Survey abandoned; nothing was scored.");
        return Ok(());
    };

    eprintln!();
    emit(instrument, &result, options, &mut std::io::stdout().lock())
}
