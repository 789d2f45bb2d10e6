use cosmos_error::{CXError, CXResult};
use cosmos_models::settings::Log;
use std::{
    str::FromStr,
    sync::{Arc, Mutex},
};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{filter::DynFilterFn, fmt, layer::SubscriberExt, Layer, Registry};

/// Console plus daily rolling file logging, sharing one adjustable level.
pub struct Logger {
    level: Arc<Mutex<Level>>,
    dir: String,
    file_name: String,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        let defaults = Log::default();
        Logger {
            level: Arc::new(Mutex::new(level.unwrap_or(Level::INFO))),
            dir: defaults.dir,
            file_name: defaults.file_name,
            _file_guard: None,
        }
    }

    /// Build from the `[log]` section. An unknown level name falls back to `info`.
    pub fn from_settings(log: &Log) -> Self {
        let level = Level::from_str(log.level.trim()).unwrap_or(Level::INFO);
        Logger {
            level: Arc::new(Mutex::new(level)),
            dir: log.dir.clone(),
            file_name: log.file_name.clone(),
            _file_guard: None,
        }
    }

    /// Sets the new logging level; takes effect for both outputs immediately.
    #[inline]
    pub fn set_level(&self, new_level: Level) {
        let mut level = self.level.lock().unwrap_or_else(|e| e.into_inner());
        *level = new_level;
    }

    #[inline]
    pub fn get_level(&self) -> Level {
        *self.level.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Installs the global subscriber.
    ///
    /// Fails when a global subscriber is already set.
    pub fn initialize(&mut self) -> CXResult<()> {
        let file_appender = rolling::daily(&self.dir, &self.file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        self._file_guard = Some(guard);

        let console_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(|e| e.into_inner())
            })
        };

        let file_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(|e| e.into_inner())
            })
        };

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(console_filter)
        };

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_filter);

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|_| CXError::from("Failed to set logger"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_settings() {
        let logger = Logger::from_settings(&Log {
            level: "debug".into(),
            ..Log::default()
        });
        assert_eq!(logger.get_level(), Level::DEBUG);

        let logger = Logger::from_settings(&Log {
            level: "chatty".into(),
            ..Log::default()
        });
        assert_eq!(logger.get_level(), Level::INFO);

        logger.set_level(Level::WARN);
        assert_eq!(logger.get_level(), Level::WARN);
    }
}
