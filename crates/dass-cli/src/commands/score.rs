use std::path::Path;

use eyre::WrapErr;

use dass_core::models::response::ResponseSet;
use dass_instruments::Instrument;

use dass_cli::output::{ReportOptions, emit};

/// Score a response set given inline or in a file.
///
/// Files may hold a JSON array (`[0, 1, ...]`) or the same comma/whitespace
/// separated text accepted inline.
pub fn execute(
    instrument: &dyn Instrument,
    responses: Option<&str>,
    file: Option<&Path>,
    name: Option<&str>,
    options: &ReportOptions,
) -> eyre::Result<()> {
    let set = match (responses, file) {
        (Some(text), _) => text.parse::<ResponseSet>()?,
        (None, Some(path)) => read_responses(path)?,
        (None, None) => eyre::bail!("provide --responses or --file"),
    };

    let result = instrument.assess(&set, name.map(str::trim).filter(|n| !n.is_empty()));
    tracing::info!(assessment_id = %result.id, "responses scored");
    emit(instrument, &result, options, &mut std::io::stdout().lock())
}

fn read_responses(path: &Path) -> eyre::Result<ResponseSet> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read responses from {}", path.display()))?;
    let set: ResponseSet = if contents.trim_start().starts_with('[') {
        serde_json::from_str::<ResponseSet>(&contents)
            .wrap_err_with(|| format!("invalid response array in {}", path.display()))?
    } else {
        contents.parse::<ResponseSet>()?
    };
    Ok(set)
}
