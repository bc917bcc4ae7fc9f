use std::io::Read;
use std::path::PathBuf;

use adrenal_cli::config::{self, AdrenalConfig};
use adrenal_cli::input::assess_document;
use adrenal_cli::logging;
use adrenal_report::ReportFormat;
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};

#[derive(Parser, Debug)]
#[command(name = "adrenal", version, about = "Adrenal mass assessment")]
struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to the platform config dir)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Output format: markdown or json")]
    format: Option<ReportFormat>,
    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    json_logs: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess one form or an array of forms read from a JSON file or stdin.
    Assess { input: Option<PathBuf> },
    /// List the rule table in evaluation order.
    Rules,
    /// Write a default config file.
    InitConfig,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .wrap_err_with(|| format!("failed to read input at {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn list_rules(format: ReportFormat) -> Result<String> {
    let summaries = adrenal_rules::rule_summaries();
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&summaries)?),
        ReportFormat::Markdown => {
            let mut out = String::from("| Rule | Importance | Finding |\n|---|---|---|\n");
            for rule in &summaries {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    rule.id, rule.importance, rule.template
                ));
            }
            Ok(out)
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    // Events raised while loading config go to a provisional subscriber
    // built from the command-line flag alone.
    let cfg = tracing::subscriber::with_default(
        logging::subscriber(cli.json_logs, std::io::stderr),
        || config::load_config(&config_path),
    )?;
    tracing::subscriber::set_global_default(logging::subscriber(
        cli.json_logs || cfg.json_logs,
        std::io::stderr,
    ))?;

    let format = cli.format.unwrap_or(cfg.format);
    match cli.command {
        Commands::Assess { input } => {
            let document = read_input(input.as_ref())?;
            println!("{}", assess_document(&document, format)?);
        }
        Commands::Rules => print!("{}", list_rules(format)?),
        Commands::InitConfig => {
            config::save_config(&AdrenalConfig::default(), &config_path)?;
            println!("{}", config_path.display());
        }
    }
    Ok(())
}
