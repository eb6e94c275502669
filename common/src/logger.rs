use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, severity: Severity, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let marker = match severity {
            Severity::Info => "",
            Severity::Warning => "[warn]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{} {}", timestamp, prefix, marker, message),
            None => format!("[{}]{} {}", timestamp, marker, message),
        }
    }

    pub fn write(&self, severity: Severity, message: &str) {
        let line = self.format_line(severity, message);
        match severity {
            Severity::Info => println!("{}", line),
            Severity::Warning => eprintln!("{}", line),
        }
    }
}

/// Installs the process-wide logger. Returns `false` if one was already installed.
pub fn init_logger(prefix: Option<String>) -> bool {
    LOGGER.set(Logger::new(prefix)).is_ok()
}

fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(None))
}

pub fn log(message: &str) {
    logger().write(Severity::Info, message);
}

pub fn warn(message: &str) {
    logger().write(Severity::Warning, message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::warn(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_includes_prefix() {
        let logger = Logger::new(Some("snake".to_string()));
        let line = logger.format_line(Severity::Info, "ate food");
        assert!(line.contains("[snake] ate food"));
    }

    #[test]
    fn test_format_line_marks_warnings() {
        let logger = Logger::new(None);
        let line = logger.format_line(Severity::Warning, "sprite missing");
        assert!(line.ends_with("[warn] sprite missing"));
    }
}
