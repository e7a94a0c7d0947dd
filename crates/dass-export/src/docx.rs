use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Footer, Header, PageMargin, PageNum, Paragraph, Run, RunFonts,
    Style, StyleType,
};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// One line of rendered report Markdown, classified for layout.
#[derive(Debug, PartialEq, Eq)]
enum Block<'a> {
    Title(&'a str),
    Heading(&'a str),
    Bullet(&'a str),
    PageBreak,
    Blank,
    Text(&'a str),
}

impl<'a> Block<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            Block::Blank
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            Block::Title(text)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            Block::Heading(text)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            Block::Bullet(text)
        } else if trimmed == "---" {
            Block::PageBreak
        } else {
            Block::Text(trimmed)
        }
    }
}

/// Build a DOCX results document from rendered report Markdown.
///
/// Understands the subset the report templates emit: `#` title, `##`
/// subscale headings, `- ` bullets, `---` page breaks and `**bold**` runs.
/// The styles' title goes in the page header; the footer carries the
/// footer text and the page number.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.heading_size))
        .page_margin(page_margin(styles.margin_inches))
        .header(Header::new().add_paragraph(banner(&styles.title, styles, styles.body_size)))
        .footer(
            Footer::new()
                .add_paragraph(banner(&styles.footer, styles, styles.footer_size))
                .add_paragraph(
                    Paragraph::new()
                        .add_page_num(PageNum::new())
                        .wrap("none")
                        .x_align("center"),
                ),
        );

    for line in rendered.lines() {
        let paragraph = match Block::parse(line) {
            Block::Title(text) => heading_paragraph(text, "Title", styles, styles.title_size)
                .align(AlignmentType::Center),
            Block::Heading(text) => {
                heading_paragraph(text, "Heading1", styles, styles.heading_size)
            }
            Block::Bullet(text) => inline_runs(text, styles)
                .into_iter()
                .fold(Paragraph::new().add_run(body_run("\u{2022} ", styles)), |p, r| {
                    p.add_run(r)
                }),
            Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            Block::Blank => Paragraph::new(),
            Block::Text(text) => inline_runs(text, styles)
                .into_iter()
                .fold(Paragraph::new().align(AlignmentType::Left), |p, r| p.add_run(r)),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(bytes = bytes.len(), "generated docx");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

/// Uniform page margin; OOXML measures in twips (1/1440 inch).
fn page_margin(inches: f64) -> PageMargin {
    let twips = (inches * 1440.0).round() as i32;
    PageMargin::new()
        .top(twips)
        .bottom(twips)
        .left(twips)
        .right(twips)
}

fn heading_paragraph(
    text: &str,
    style_id: &str,
    styles: &DocumentStyles,
    size_pt: usize,
) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .size(size_pt * 2)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn banner(text: &str, styles: &DocumentStyles, size_pt: usize) -> Paragraph {
    Paragraph::new().align(AlignmentType::Center).add_run(
        Run::new()
            .add_text(text)
            .size(size_pt * 2)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` segments into runs. Unbalanced markers render verbatim.
fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    if segments.len() % 2 == 0 {
        return vec![body_run(text, styles)];
    }

    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(index, segment)| {
            let run = body_run(segment, styles);
            if index % 2 == 1 { run.bold() } else { run }
        })
        .collect()
}
