//! A minimal, zero-dependency logging crate for the Pyrite runtime.
//!
//! Provides a global, thread-safe logger with configurable level, automatic
//! module path capture, and colored terminal output. The runtime crates log
//! through the macros defined here; embedders control verbosity either
//! programmatically or through the `PYRITE_LOG` environment variable.
//!
//! # Example
//!
//! ```
//! use pyrite_log::{Level, debug, info, set_level};
//!
//! set_level(Level::Debug);
//!
//! info!("runtime context created");
//! debug!("interned {} strings", 3);
//! ```

use std::fmt::Arguments;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Log levels ordered from most severe (`Error`) to least severe (`Trace`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Critical failures.
    Error = 0,
    /// Potentially harmful situations.
    Warn = 1,
    /// Informational messages.
    Info = 2,
    /// Detailed diagnostics.
    Debug = 3,
    /// Fine-grained tracing.
    Trace = 4,
}

impl Level {
    /// ANSI color code used when rendering this level.
    const fn color_code(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// The uppercase name of this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Error,
            1 => Level::Warn,
            3 => Level::Debug,
            4 => Level::Trace,
            _ => Level::Info,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}

/// The global logger.
///
/// Level changes are atomic, so the logger can be shared freely across
/// threads. Use [`get_logger`] to obtain the singleton.
pub struct Logger {
    level: AtomicU8,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Sets the minimum level; messages below it are discarded.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Returns the current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.level.load(Ordering::Relaxed)
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, initializing it at `Level::Info` on first use.
pub fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(Level::Info))
}

/// Sets the minimum level of the global logger.
pub fn set_level(level: Level) {
    get_logger().set_level(level);
}

/// Sets the minimum level from a string such as `"debug"`.
pub fn set_level_from_str(s: &str) -> Result<(), String> {
    let level = Level::from_str(s)?;
    set_level(level);
    Ok(())
}

/// Initializes the global level from the `PYRITE_LOG` environment variable.
///
/// An unset or unparsable variable leaves the level untouched. Returns the
/// level in effect afterwards.
pub fn init_from_env() -> Level {
    if let Ok(raw) = std::env::var("PYRITE_LOG") {
        if let Ok(level) = Level::from_str(&raw) {
            set_level(level);
        }
    }
    get_logger().level()
}

/// Emits a record. Called by the macros after an `enabled` check.
#[doc(hidden)]
pub fn __log_with_target(level: Level, target: &str, args: Arguments) {
    const RESET: &str = "\x1b[0m";

    if !get_logger().enabled(level) {
        return;
    }

    let color = level.color_code();
    eprintln!("{color}[{}]{RESET} {target}: {args}", level.as_str());
}

/// Logs a message at an explicit level, capturing the caller's module path.
///
/// # Example
///
/// ```
/// use pyrite_log::{Level, log};
///
/// log!(level: Level::Info, "loaded {} values", 4);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        if $crate::get_logger().enabled($level) {
            $crate::__log_with_target($level, module_path!(), format_args!($($arg)*));
        }
    };
}

/// Logs at the Error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

/// Logs at the Warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

/// Logs at the Info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

/// Logs at the Debug level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

/// Logs at the Trace level.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert!(Level::Debug < Level::Trace);
    }

    #[test]
    fn level_from_str() {
        assert_eq!(Level::from_str("error"), Ok(Level::Error));
        assert_eq!(Level::from_str("WARNING"), Ok(Level::Warn));
        assert_eq!(Level::from_str(" info "), Ok(Level::Info));
        assert_eq!(Level::from_str("Debug"), Ok(Level::Debug));
        assert_eq!(Level::from_str("trace"), Ok(Level::Trace));
        assert!(Level::from_str("loud").is_err());
    }

    #[test]
    fn level_as_str() {
        assert_eq!(Level::Error.as_str(), "ERROR");
        assert_eq!(Level::Trace.as_str(), "TRACE");
    }

    #[test]
    fn logger_filtering() {
        let logger = Logger::new(Level::Info);

        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Info));
        assert!(!logger.enabled(Level::Debug));

        logger.set_level(Level::Trace);
        assert!(logger.enabled(Level::Trace));

        logger.set_level(Level::Error);
        assert!(!logger.enabled(Level::Warn));
    }

    #[test]
    fn global_logger_is_singleton() {
        set_level(Level::Info);

        let a = get_logger();
        let b = get_logger();
        a.set_level(Level::Warn);
        assert_eq!(b.level(), Level::Warn);

        set_level(Level::Info);
    }

    #[test]
    fn macros_expand() {
        set_level(Level::Trace);

        error!("error {}", 1);
        warn!("warn");
        info!("info {:?}", [1, 2]);
        debug!("debug");
        trace!("trace");

        set_level(Level::Info);
    }

    #[test]
    fn concurrent_level_changes() {
        use std::thread;

        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    if i % 2 == 0 {
                        set_level(Level::Info);
                    }
                    info!("thread {i}");
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
