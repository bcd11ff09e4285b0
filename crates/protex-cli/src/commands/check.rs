use super::load_target;
use crate::cli::{CheckArgs, OutputFormat};
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use protex::core::io::batch::load_batch;
use protex::validation::outcome::Outcome;
use protex::workflows::{self, register::RegistrationReport};
use std::fmt::Write;
use tracing::{info, warn};

pub fn run(args: CheckArgs, config: PartialConfig) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let settings = config.merge_with_cli(&args)?;

    let target = load_target(&args.target)?;
    info!("Loading registration batch from {:?}", &args.batch);
    let batch = load_batch(&args.batch, &target).map_err(|e| CliError::FileParsing {
        path: args.batch.clone(),
        source: e.into(),
    })?;

    let report = workflows::register::run(&target, &batch, &settings.validation)?;

    match settings.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(|e| CliError::Other(e.into()))?
        ),
    }

    if report.is_submittable() {
        Ok(())
    } else {
        warn!("Batch for '{}' is not ready to submit.", report.target_name);
        Err(CliError::NotSubmittable {
            invalid: report.tally.invalid,
            deferred: report.tally.deferred,
        })
    }
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Valid => "valid".to_string(),
        Outcome::Deferred => "incomplete".to_string(),
        Outcome::Invalid(violations) => {
            let messages: Vec<_> = violations
                .iter()
                .map(|v| format!("{} ({})", v.message(), v.tag()))
                .collect();
            format!("invalid: {}", messages.join(" "))
        }
    }
}

fn render_text(report: &RegistrationReport) -> String {
    let mut out = format!("Target '{}'\n", report.target_name);
    for (i, outcome) in report.ptms.iter().enumerate() {
        let _ = writeln!(out, "  PTM #{}: {}", i + 1, describe(outcome));
    }
    for (i, outcome) in report.interactions.iter().enumerate() {
        let _ = writeln!(out, "  Interaction #{}: {}", i + 1, describe(outcome));
    }
    if let Some(outcome) = &report.copy_selection {
        let _ = writeln!(out, "  Copy selection: {}", describe(outcome));
    }
    let _ = writeln!(
        out,
        "Summary: {} valid, {} invalid, {} incomplete",
        report.tally.valid, report.tally.invalid, report.tally.deferred
    );
    out
}
