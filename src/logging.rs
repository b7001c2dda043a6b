use std::path::{Path, PathBuf};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let (appender, file_error) = match log_file.as_deref().map(file_appender) {
        Some(Ok(appender)) => (Some(appender), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let file_layer = appender.map(|appender| {
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .json()
    });

    subscriber.with(file_layer).init();

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "File logging disabled, logging to stderr only");
    }
}

/// Daily rolling appender for `log_path`, creating its directory if needed.
fn file_appender(log_path: &Path) -> Result<RollingFileAppender, InitError> {
    let prefix = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "courses.log".to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(log_dir(log_path))
}

/// Directory the rolling log files are written to.
fn log_dir(log_path: &Path) -> &Path {
    match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("courses={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "courses=info");
        assert_eq!(default_directive(true), "courses=debug");
    }

    #[test]
    fn test_log_dir() {
        assert_eq!(log_dir(Path::new("logs/courses.log")), Path::new("logs"));
        assert_eq!(log_dir(Path::new("courses.log")), Path::new("."));
    }

    #[test]
    fn test_file_appender_creates_missing_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("courses.log");

        assert!(file_appender(&log_path).is_ok());
        assert!(temp_dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_file_appender_reports_unusable_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = file_appender(&blocker.join("courses.log")).unwrap_err();
        assert!(err.to_string().contains("log directory"));
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
