use std::io::{BufRead, Write};

use eyre::WrapErr;

use dass_core::models::assessment::AssessmentResult;
use dass_core::models::response::LikertOption;
use dass_core::models::session::SurveySession;
use dass_instruments::Instrument;

/// What the respondent typed at a question prompt.
#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Choice(LikertOption),
    Restart,
    Quit,
    Invalid,
}

fn parse_answer(line: &str) -> Answer {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Answer::Quit,
        "r" | "restart" => Answer::Restart,
        other => other
            .parse::<u8>()
            .ok()
            .and_then(|v| LikertOption::try_from(v).ok())
            .map_or(Answer::Invalid, Answer::Choice),
    }
}

/// Read one line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> eyre::Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).wrap_err("failed to read answer")?;
    Ok((n > 0).then_some(line))
}

/// Present the questionnaire one item at a time and score the answers.
///
/// Returns `None` if the respondent quits. `display_name`, when given,
/// skips the name prompt at the end.
pub fn run_survey<R: BufRead, W: Write>(
    instrument: &dyn Instrument,
    session: &mut SurveySession,
    display_name: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> eyre::Result<Option<AssessmentResult>> {
    let items = instrument.items();
    writeln!(
        output,
        "{}: answer how much each statement applied to you over the past week.",
        instrument.name()
    )?;
    writeln!(output, "Type the option number; r restarts, q quits.")?;

    while let Some(index) = session.current_item() {
        let item = items
            .get(index)
            .ok_or_else(|| eyre::eyre!("no item at position {index}"))?;

        writeln!(output)?;
        writeln!(output, "Q{} of {}: {}", item.number, items.len(), item.text)?;
        for option in LikertOption::ALL {
            writeln!(output, "  [{}] {}", option.value(), option.label())?;
        }

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                eyre::bail!(
                    "input ended after {} of {} answers",
                    session.answered(),
                    items.len()
                );
            };

            match parse_answer(&line) {
                Answer::Choice(option) => {
                    session.record(option)?;
                    break;
                }
                Answer::Restart => {
                    tracing::info!(session = %session.id(), "survey restarted");
                    session.reset();
                    writeln!(output, "Restarting from the first question.")?;
                    break;
                }
                Answer::Quit => {
                    tracing::info!(
                        session = %session.id(),
                        answered = session.answered(),
                        "survey abandoned"
                    );
                    return Ok(None);
                }
                Answer::Invalid => {
                    writeln!(output, "Please answer 0, 1, 2 or 3 (r restarts, q quits).")?;
                }
            }
        }
    }

    match display_name {
        Some(name) => session.set_display_name(name),
        None => {
            writeln!(output)?;
            write!(output, "Your name (optional): ")?;
            output.flush()?;
            if let Some(line) = read_line(input)? {
                session.set_display_name(&line);
            }
        }
    }

    let responses = session.finish()?;
    let result = instrument.assess(&responses, session.display_name());
    tracing::info!(
        session = %session.id(),
        assessment_id = %result.id,
        "survey completed"
    );
    Ok(Some(result))
}
