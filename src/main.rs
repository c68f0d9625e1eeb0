mod config;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use config::{Config, Overrides};
use tierscope_logs::{ClassifiedRecord, LogPipeline, Outcome, TierCounts, emit_alerts, write_report};

/// Tierscope - Classify log events into severity tiers and report critical ones
#[derive(Parser, Debug)]
#[command(name = "tierscope")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log file to analyze (defaults to log/log.txt)
    #[arg(value_name = "LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Where to write the text report (defaults to relatorio/relatorio.txt)
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Settings file (defaults to ./tierscope.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the train/test split and the forest
    #[arg(long)]
    seed: Option<u64>,

    /// Number of trees in the forest
    #[arg(long)]
    trees: Option<usize>,

    /// Skip the tier chart
    #[arg(long)]
    no_chart: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = load_config(args).and_then(run_app);
    exit_code(result, &mut io::stderr().lock())
}

/// Print a failed run's error chain once and map the result to an exit code
fn exit_code<W: Write>(result: Result<()>, err: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: Args) -> Result<Config> {
    Config::load(
        args.config.as_deref(),
        Overrides {
            log_path: args.log_file,
            report_path: args.report,
            seed: args.seed,
            trees: args.trees,
            no_chart: args.no_chart,
        },
    )
}

fn run_app(config: Config) -> Result<()> {
    let pipeline = LogPipeline::new(config.model.clone());
    let outcome = pipeline
        .run(&config.log_path)
        .with_context(|| format!("failed to classify {}", config.log_path.display()))?;

    let records = match outcome {
        Outcome::MissingInput(path) => {
            println!("Arquivo de logs não encontrado: {}", path.display());
            return Ok(());
        }
        Outcome::NoLogs => {
            println!("Não foi possível carregar os logs.");
            return Ok(());
        }
        Outcome::Classified(records) => records,
    };

    {
        let mut stdout = io::stdout().lock();
        emit_alerts(&records, &mut stdout).context("failed to print alerts")?;
        stdout.flush()?;
    }

    save_report(&config, &records);

    if config.show_chart {
        show_chart(&records);
    }

    Ok(())
}

/// Report failures are printed and do not stop the run
fn save_report(config: &Config, records: &[ClassifiedRecord]) {
    match write_report(&config.report_path, records) {
        Ok(()) => println!("✅ Relatório salvo em: {}", config.report_path.display()),
        Err(e) => println!("Erro ao gerar relatório: {}", e),
    }
}

fn show_chart(records: &[ClassifiedRecord]) {
    if !io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, skipping chart");
        return;
    }

    let counts = TierCounts::from_records(records);
    if let Err(e) = tierscope_tui::show_tier_chart(&counts) {
        tracing::error!(error = %e, "failed to display tier chart");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_is_printed_once() {
        let mut err = Vec::new();
        let result: Result<()> = Err(anyhow::anyhow!("labels contain 1 distinct class(es)"))
            .context("failed to classify log/log.txt");

        assert_eq!(exit_code(result, &mut err), ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: failed to classify log/log.txt: labels contain 1 distinct class(es)\n"
        );
    }

    #[test]
    fn test_success_prints_nothing() {
        let mut err = Vec::new();
        assert_eq!(exit_code(Ok(()), &mut err), ExitCode::SUCCESS);
        assert!(err.is_empty());
    }
}
