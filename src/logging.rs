// Conditional logging macros - only active in debug builds

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Used while the full-screen UI owns the terminal.
    File,
}

/// `<cache dir>/gordle/gordle.log`
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("gordle").join("gordle.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Installs the global logger. `RUST_LOG` overrides the default `warn` filter.
///
/// When file logging is requested but the log file cannot be opened, logging
/// is switched off rather than written over the UI.
pub fn init(target: LogTarget) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if target == LogTarget::File {
        match open_log_file() {
            Some(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    // A logger may already be installed (tests call this more than once).
    let _ = builder.try_init();
    info_log!("Logger initialized ({:?})", target);
}
