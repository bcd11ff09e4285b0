use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
    registry::LookupSpan,
};

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Plain-text layer for `--log-file`. Closing a workflow span (registration
/// or gene upload) writes its timing, so a log of a batch check records how
/// long each validation pass took.
fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            subscriber.with(file_layer(file)).init();
        }
        None => subscriber.init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use protex::core::io::batch::RegistrationBatch;
    use protex::core::models::ids::SubunitId;
    use protex::core::models::subunit::{Subunit, Target};
    use protex::validation::config::ValidationConfig;
    use protex::workflows;
    use serial_test::serial;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn log_file_records_workflow_spans() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("check.log");
        let subscriber =
            tracing_subscriber::registry().with(file_layer(File::create(&log_path).unwrap()));

        let target = Target {
            target_name: "p53".into(),
            partner: String::new(),
            protein_class: String::new(),
            project_name: String::new(),
            notes: String::new(),
            subunits: vec![Subunit::new(SubunitId(1), "TP53", "MCDE", 2)],
        };
        tracing::subscriber::with_default(subscriber, || {
            workflows::register::run(
                &target,
                &RegistrationBatch::default(),
                &ValidationConfig::default(),
            )
            .unwrap();
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("registration_workflow"));
        assert!(content.contains("target_name=p53"));
        assert!(content.contains("close"));
        assert!(!content.contains("\u{1b}["));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
