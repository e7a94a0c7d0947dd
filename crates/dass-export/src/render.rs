use serde::Serialize;
use tera::{Context, Tera};

use dass_core::models::assessment::AssessmentResult;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Built-in results template (Tera/Jinja2 syntax, Markdown output).
pub const DEFAULT_TEMPLATE: &str = r#"# {{ title }}

{% if display_name %}**Name:** {{ display_name }}

{% endif %}Administered: {{ administered_on }}

{% for result in results %}## {{ result.subscale }}

Score: {{ result.score }} - {{ result.category }}

{{ result.message }}

{% endfor %}{{ footer }}
"#;

/// Template context for a results document.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub title: String,
    pub footer: String,
    pub instrument: String,
    pub display_name: Option<String>,
    pub administered_on: String,
    pub results: Vec<ReportRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub subscale: String,
    pub score: u32,
    pub category: String,
    pub message: String,
}

impl ReportContext {
    pub fn new(result: &AssessmentResult, styles: &DocumentStyles) -> Self {
        Self {
            title: styles.title.clone(),
            footer: styles.footer.clone(),
            instrument: result.instrument_name.clone(),
            display_name: result
                .display_name
                .as_deref()
                .map(inline_text)
                .filter(|name| !name.is_empty()),
            administered_on: result.administered_at.strftime("%Y-%m-%d").to_string(),
            results: result
                .results
                .iter()
                .map(|r| ReportRow {
                    subscale: r.subscale_name.clone(),
                    score: r.score,
                    category: r.severity.label().to_string(),
                    message: r.message.clone(),
                })
                .collect(),
        }
    }
}

/// Collapse `text` onto one line with no `*` so it cannot open a heading
/// or unbalance the `**bold**` markers around it.
fn inline_text(text: &str) -> String {
    text.replace('*', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a Tera template against a report context.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render an assessment as Markdown, using `template` or the built-in one.
pub fn render_report(
    result: &AssessmentResult,
    styles: &DocumentStyles,
    template: Option<&str>,
) -> Result<String, ExportError> {
    let context = ReportContext::new(result, styles);
    let rendered = render_template(
        "report.md",
        template.unwrap_or(DEFAULT_TEMPLATE),
        &context,
    )?;
    tracing::debug!(
        assessment_id = %result.id,
        custom_template = template.is_some(),
        bytes = rendered.len(),
        "rendered report"
    );
    Ok(rendered)
}
