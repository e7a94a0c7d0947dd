use dass_instruments::Instrument;

use dass_cli::config::OutputFormat;

/// Print the questionnaire items with the subscale each one feeds.
pub fn execute(instrument: &dyn Instrument, format: OutputFormat) -> eyre::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(instrument.items())?);
        }
        OutputFormat::Text => {
            for item in instrument.items() {
                println!("{:>2}. [{}] {}", item.number, item.subscale_id, item.text);
            }
        }
        OutputFormat::Markdown => print!("{}", markdown_items(instrument)),
    }
    Ok(())
}

/// One section per subscale, each an ordered list keeping questionnaire numbers.
fn markdown_items(instrument: &dyn Instrument) -> String {
    let items = instrument.items();
    let mut md = format!("# {} items\n", instrument.name());
    for subscale in instrument.subscales() {
        md.push_str(&format!("\n## {}\n\n", subscale.name));
        if let Some(description) = &subscale.description {
            md.push_str(&format!("{description}\n\n"));
        }
        for &index in &subscale.items {
            let item = &items[index];
            md.push_str(&format!("{}. {}\n", item.number, item.text));
        }
    }
    md
}

#[cfg(test)]
mod tests {
    use dass_instruments::Dass21;

    use super::*;

    #[test]
    fn markdown_groups_items_under_subscale_headings() {
        let md = markdown_items(&Dass21);
        assert!(md.starts_with("# DASS-21 items\n"));
        assert!(md.contains("\n## Anxiety\n\nAutonomic arousal"));
        assert!(md.contains("\n8. I was aware of dryness of my mouth.\n"));
        assert_eq!(md.lines().filter(|line| line.starts_with("## ")).count(), 3);
        assert!(!md.contains("[depression]"));
    }
}
