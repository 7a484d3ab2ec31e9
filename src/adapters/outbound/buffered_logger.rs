use crate::domains::logger::DomainLogger;
use std::sync::Arc;
use tokio::sync::mpsc;

enum Level {
    Info,
    Warn,
    Error,
}

struct LogMessage {
    level: Level,
    msg: String,
}

struct BufferedLogger {
    sender: mpsc::Sender<LogMessage>,
}

impl BufferedLogger {
    fn push(&self, level: Level, msg: &str) {
        // drop on full
        let _ = self.sender.try_send(LogMessage { level, msg: msg.to_string() });
    }
}

impl DomainLogger for BufferedLogger {
    fn info(&self, msg: &str) {
        self.push(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(Level::Error, msg);
    }
}

/// Non-blocking logger so that UI-thread callers never wait on a slow sink.
/// Messages are forwarded to `bridge` from a background task; must be called
/// inside a tokio runtime.
pub fn init_buffered_logger(bridge: Arc<dyn DomainLogger>, capacity: usize) -> Arc<dyn DomainLogger> {
    let (tx, mut rx) = mpsc::channel::<LogMessage>(capacity);

    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match msg.level {
                Level::Info => bridge.info(&msg.msg),
                Level::Warn => bridge.warn(&msg.msg),
                Level::Error => bridge.error(&msg.msg),
            }
        }
    });

    Arc::new(BufferedLogger { sender: tx })
}
