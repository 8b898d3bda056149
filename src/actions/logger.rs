//! Severity-filtered logging with GitHub Actions annotation prefixes
//!
//! Records go through the `log` facade; the `env_logger` backend installed
//! by [`init_logger`] filters them against the configured [`Severity`] and
//! prefixes them the way the Actions runner expects (`::warning::`,
//! `::debug::`, nothing for info).

use log::LevelFilter;
use std::io::Write;

/// Log severities understood by the action, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

impl Severity {
    /// Parse a configured level name; anything unrecognized means `info`
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "debug" => Severity::Debug,
            "info" => Severity::Info,
            "warn" => Severity::Warn,
            _ => Severity::Info,
        }
    }

    /// Annotation prefix for emitted lines
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Debug => "::debug::",
            Severity::Info => "",
            Severity::Warn => "::warning::",
        }
    }

    /// Map a `log` record level onto the three action severities
    pub fn from_level(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }

    /// Threshold handed to `env_logger`: this severity and above pass
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Debug => LevelFilter::Debug,
            Severity::Info => LevelFilter::Info,
            Severity::Warn => LevelFilter::Warn,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
        }
    }
}

/// Render a log line with its annotation prefix
pub fn format_line(severity: Severity, message: &str) -> String {
    format!("{}{}", severity.prefix(), message)
}

/// Install the stdout logger for this crate's records only.
///
/// Dependency records (reqwest, hyper) are dropped so request details never
/// reach the job log.
pub fn init_logger(configured: Severity) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .filter_module(env!("CARGO_CRATE_NAME"), configured.level_filter())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let severity = Severity::from_level(record.level());
            writeln!(buf, "{}", format_line(severity, &record.args().to_string()))
        })
        .init();
}
