//! Logging backend for repo-shell.
//!
//! All `log::info!()` and friends are routed to a debug log file in the
//! system temp directory (`/tmp/repo_shell_debug.log` on Unix). The CLI prints
//! its own output to stdout, so diagnostics stay out of it unless `RUST_LOG`
//! is set, in which case records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the
//! `log_level` config key (applied later through [`set_log_level`]).

use parking_lot::Mutex;
use repo_shell_config::LogLevel;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE_NAME: &str = "repo_shell_debug.log";

/// Set once the CLI or `RUST_LOG` has chosen a level; config must not override it
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

static LOGGER: OnceLock<DebugLogger> = OnceLock::new();

struct DebugLogger {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn open(mirror_stderr: bool) -> Self {
        let path = log_path();
        let file = match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&path)
        {
            Ok(mut f) => {
                let _ = writeln!(
                    f,
                    "{}\nrepo-shell debug session started at {}\n{}",
                    "=".repeat(80),
                    timestamp(),
                    "=".repeat(80)
                );
                Some(f)
            }
            // No log file is not worth failing the command over
            Err(_) => None,
        };
        Self {
            file: Mutex::new(file),
            mirror_stderr,
        }
    }
}

impl log::Log for DebugLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = writeln!(file, "{line}");
        }
        if self.mirror_stderr {
            eprintln!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

/// Location of the debug log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn rust_log_level() -> Option<log::LevelFilter> {
    let value = std::env::var("RUST_LOG").ok()?;
    // Only the global level is honoured; per-target directives are ignored
    value
        .split(',')
        .find(|part| !part.contains('='))
        .and_then(|part| part.trim().parse().ok())
}

/// Install the logger. Safe to call more than once; later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env_level = rust_log_level();
    let logger = LOGGER.get_or_init(|| DebugLogger::open(env_level.is_some()));
    if log::set_logger(logger).is_err() {
        return;
    }

    let level = match (cli_level, env_level) {
        (Some(level), _) => {
            LEVEL_PINNED.store(true, Ordering::Relaxed);
            level.to_level_filter()
        }
        (None, Some(filter)) => {
            LEVEL_PINNED.store(true, Ordering::Relaxed);
            filter
        }
        (None, None) => log::LevelFilter::Info,
    };
    log::set_max_level(level);
}

/// Apply the configured level unless the CLI or `RUST_LOG` already chose one
pub fn set_log_level(level: LogLevel) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        log::debug!(
            "Ignoring config log level '{}', overridden at startup",
            level.display_name()
        );
        return;
    }
    log::set_max_level(level.to_level_filter());
}
