use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use dass_cli::config::{OutputFormat, load_config};
use dass_cli::output::ReportOptions;
use dass_instruments::{Dass21, Instrument};

mod commands;

#[derive(Parser)]
#[command(name = "dass21", version, about = "DASS-21 depression, anxiety and stress self-report")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path (default: <config dir>/dass21/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the questionnaire interactively
    Take {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Score a completed set of 21 responses
    Score {
        /// Responses 0-3, comma or space separated
        #[arg(long, conflicts_with = "file")]
        responses: Option<String>,

        /// File holding a JSON array or separated responses
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// List the questionnaire items
    Questions {
        /// Output format: text or json
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ReportArgs {
    /// Respondent name shown on the results
    #[arg(long)]
    name: Option<String>,

    /// Output format (default from config, else text)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also write the results document as DOCX
    #[arg(long)]
    docx: Option<PathBuf>,

    /// Tera template for markdown and DOCX output
    #[arg(long)]
    template: Option<PathBuf>,
}

fn init_tracing(verbose: u8, json: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    let instrument = Dass21;
    instrument.validate_tables()?;

    match cli.command {
        Commands::Take { report } => {
            let config = load_config(cli.config.as_deref())?;
            let options = ReportOptions::resolve(
                &config,
                report.format,
                report.template.as_deref(),
                report.docx,
            )?;
            commands::take::execute(&instrument, report.name.as_deref(), &options)
        }
        Commands::Score {
            responses,
            file,
            report,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let options = ReportOptions::resolve(
                &config,
                report.format,
                report.template.as_deref(),
                report.docx,
            )?;
            commands::score::execute(
                &instrument,
                responses.as_deref(),
                file.as_deref(),
                report.name.as_deref(),
                &options,
            )
        }
        Commands::Questions { format } => commands::questions::execute(&instrument, format),
        Commands::InitConfig { force } => {
            commands::init_config::execute(cli.config.as_deref(), force)
        }
    }
}
