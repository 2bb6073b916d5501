//! Logging to a file through tracing.
//!
//! The terminal UI owns the screen, so it always logs to a file. Headless runs
//! write their output to stdout and only log when a log file is requested.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "paramform.log";

/// How the program is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Headless,
}

impl RunMode {
    /// Level used when none is given on the command line.
    ///
    /// Headless logs default to `debug` so a requested log records every edit.
    pub fn default_level(self) -> &'static str {
        match self {
            Self::Interactive => "info",
            Self::Headless => "debug",
        }
    }

    /// Whether anything is logged at all.
    pub fn logs(self, log_path: Option<&Path>) -> bool {
        match self {
            Self::Interactive => true,
            Self::Headless => log_path.is_some(),
        }
    }
}

/// Filter directive limiting output to this crate at `level`.
pub fn filter_directive(mode: RunMode, level: Option<&str>) -> String {
    format!(
        "paramform={}",
        level.unwrap_or_else(|| mode.default_level())
    )
}

/// Initialize tracing with file output, if `mode` logs at all.
///
/// The returned guard must be held for the duration of the program; dropping
/// it flushes remaining logs. In debug builds span enter/exit events are
/// logged as well.
pub fn init_logging(
    mode: RunMode,
    log_path: Option<&Path>,
    level: Option<&str>,
) -> Option<WorkerGuard> {
    if !mode.logs(log_path) {
        return None;
    }

    let log_path = log_path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let parent = log_path.parent().unwrap_or(Path::new("."));
    let filename = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));

    let file_appender = tracing_appender::rolling::never(parent, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_new(filter_directive(mode, level))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(mode, None)));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_logs_only_with_a_file() {
        assert!(!RunMode::Headless.logs(None));
        assert!(RunMode::Headless.logs(Some(Path::new("run.log"))));
        assert!(RunMode::Interactive.logs(None));
    }

    #[test]
    fn level_defaults_per_mode() {
        assert_eq!(filter_directive(RunMode::Interactive, None), "paramform=info");
        assert_eq!(filter_directive(RunMode::Headless, None), "paramform=debug");
        assert_eq!(
            filter_directive(RunMode::Headless, Some("warn")),
            "paramform=warn"
        );
    }

    #[test]
    fn headless_without_file_installs_nothing() {
        assert!(init_logging(RunMode::Headless, None, None).is_none());
    }
}
