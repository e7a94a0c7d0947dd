use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::WrapErr;

use dass_core::models::assessment::AssessmentResult;
use dass_export::docx::generate_docx;
use dass_export::render::render_report;
use dass_export::styles::DocumentStyles;
use dass_instruments::Instrument;

use crate::config::{Dass21Config, OutputFormat};

/// How a finished assessment should be reported.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub styles: DocumentStyles,
    pub template: Option<String>,
    pub docx_path: Option<PathBuf>,
}

impl ReportOptions {
    /// Combine command-line choices with the loaded config.
    pub fn resolve(
        config: &Dass21Config,
        format: Option<OutputFormat>,
        template_path: Option<&Path>,
        docx_path: Option<PathBuf>,
    ) -> eyre::Result<Self> {
        let template = match template_path.or(config.template_path.as_deref()) {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read template {}", path.display()))?,
            ),
            None => None,
        };

        Ok(Self {
            format: format.unwrap_or(config.format),
            styles: config.styles.clone(),
            template,
            docx_path,
        })
    }
}

/// Plain-text results: summary lines followed by each band's message.
pub fn format_text(instrument: &dyn Instrument, result: &AssessmentResult) -> String {
    let mut output = String::new();
    if let Some(name) = &result.display_name {
        output.push_str(&format!("Name: {name}\n\n"));
    }
    output.push_str(&instrument.to_structured_input(&result.results));
    for r in &result.results {
        output.push_str(&format!("\n{}: {}\n", r.subscale_name, r.message));
    }
    output
}

/// Render `result` in the requested format.
pub fn format_result(
    instrument: &dyn Instrument,
    result: &AssessmentResult,
    options: &ReportOptions,
) -> eyre::Result<String> {
    match options.format {
        OutputFormat::Text => Ok(format_text(instrument, result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
        OutputFormat::Markdown => Ok(render_report(
            result,
            &options.styles,
            options.template.as_deref(),
        )?),
    }
}

/// Print the results and write the DOCX document if one was requested.
pub fn emit<W: Write>(
    instrument: &dyn Instrument,
    result: &AssessmentResult,
    options: &ReportOptions,
    out: &mut W,
) -> eyre::Result<()> {
    let text = format_result(instrument, result, options)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;

    if let Some(path) = &options.docx_path {
        let rendered = render_report(result, &options.styles, options.template.as_deref())?;
        let bytes = generate_docx(&rendered, &options.styles)?;
        std::fs::write(path, &bytes)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::info!(
            assessment_id = %result.id,
            path = %path.display(),
            bytes = bytes.len(),
            "results document written"
        );
    }
    Ok(())
}
