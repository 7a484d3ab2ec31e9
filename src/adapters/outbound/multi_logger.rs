use crate::adapters::outbound::{init_buffered_logger, init_console_logger};
use crate::config::LoggingConfig;
use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards every message to a primary logger and an optional secondary one.
pub struct MultiLogger {
    primary: Arc<dyn DomainLogger>,
    secondary: Option<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(primary: Arc<dyn DomainLogger>, secondary: Option<Arc<dyn DomainLogger>>) -> Self {
        Self { primary, secondary }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.primary.info(msg);
        if let Some(sec) = &self.secondary {
            sec.info(msg);
        }
    }

    fn warn(&self, msg: &str) {
        self.primary.warn(msg);
        if let Some(sec) = &self.secondary {
            sec.warn(msg);
        }
    }

    fn error(&self, msg: &str) {
        self.primary.error(msg);
        if let Some(sec) = &self.secondary {
            sec.error(msg);
        }
    }
}

/// File logger at `path` with the console attached as secondary; console only if the file fails.
pub fn init_combined_logger(path: &str) -> Arc<dyn DomainLogger> {
    let console = init_console_logger();
    match crate::adapters::outbound::file_logger::init_file_logger(path) {
        Ok(file_logger) => Arc::new(MultiLogger::new(file_logger, Some(console))) as Arc<dyn DomainLogger>,
        Err(e) => {
            console.warn(&format!("{}; logging to console only", e));
            console
        }
    }
}

/// Logger for the binary. With a configured file, messages go through a buffered
/// channel into file + console so connect calls never wait on disk; otherwise console.
/// Must run inside a tokio runtime, and before anything else claims the `log` facade.
pub fn init_configured_logger(config: &LoggingConfig, capacity: usize) -> Arc<dyn DomainLogger> {
    match &config.file {
        Some(path) => init_buffered_logger(init_combined_logger(path), capacity),
        None => init_console_logger(),
    }
}
