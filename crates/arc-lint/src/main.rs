//! Admit runner manifests from the command line.
//!
//! Each file holds one JSON runner document; with no files a single document is
//! read from stdin. The exit status is non-zero when any document is rejected.
use std::{io::Read, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use arc_core::prelude::{Admission, CoreError};
use arc_observe::{
    LoggerConfig, LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset, init_logger,
};

#[derive(Parser)]
#[command(name = "arc-lint")]
#[command(about = "Validate runner manifests before they reach the cluster", long_about = None)]
struct Cli {
    /// Runner documents to check. Reads stdin when empty.
    files: Vec<PathBuf>,

    /// Log filter, e.g. `info` or `arc_core=debug,warn`
    #[arg(long, env = "ARC_LOG", default_value = "info")]
    log: LoggerLevel,

    /// Log output format (text, json, journald)
    #[arg(long, env = "ARC_LOG_FORMAT", default_value = "text")]
    log_format: LoggerFormat,

    /// Timezone of log timestamps (utc, local)
    #[arg(long, env = "ARC_LOG_TZ", default_value = "utc")]
    log_tz: LoggerTimeZone,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.log_tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    init_logger(&LoggerConfig {
        format: cli.log_format,
        level: cli.log,
        tz: cli.log_tz,
        ..Default::default()
    })?;

    let documents = if cli.files.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading runner document from stdin")?;
        vec![("<stdin>".to_string(), buf)]
    } else {
        cli.files
            .iter()
            .map(|p| {
                let body = std::fs::read_to_string(p)
                    .with_context(|| format!("reading {}", p.display()))?;
                Ok((p.display().to_string(), body))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let admission = Admission::default();
    let mut rejected = 0usize;
    for (source, body) in &documents {
        match admission.review_json(body) {
            Ok(effective) => info!(%source, scope = %effective.scope, "ok"),
            Err(CoreError::Rejected { name, errors }) => {
                rejected += 1;
                for err in errors {
                    error!(%source, runner = %name, "{err}");
                }
            }
            Err(e) => {
                rejected += 1;
                error!(%source, "{e}");
            }
        }
    }

    info!(checked = documents.len(), rejected, "done");
    Ok(if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn files_and_log_options_parse() {
        let cli = Cli::try_parse_from([
            "arc-lint",
            "--log",
            "arc_core=debug,info",
            "--log-format",
            "json",
            "a.json",
            "b.json",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(cli.log.as_str(), "arc_core=debug,info");
        assert_eq!(cli.log_format, LoggerFormat::Json);
        assert_eq!(cli.log_tz, LoggerTimeZone::Utc);
    }

    #[test]
    fn invalid_log_filter_is_a_usage_error() {
        assert!(Cli::try_parse_from(["arc-lint", "--log", "arc_core=loud"]).is_err());
    }
}
