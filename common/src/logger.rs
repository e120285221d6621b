use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
}

/// Writes timestamped lines to stderr, keeping stdout free for the board.
pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Info => true,
            LogLevel::Debug => self.verbose,
        }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let level_tag = match level {
            LogLevel::Info => "",
            LogLevel::Debug => "[debug]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{} {}", timestamp, prefix, level_tag, message),
            None => format!("[{}]{} {}", timestamp, level_tag, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("{}", self.format_line(level, message));
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    } else if level == LogLevel::Info {
        eprintln!("Logger not initialized! Call init_logger() first. Message: {}", message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, &format!($($arg)*))
    };
}
