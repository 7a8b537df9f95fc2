extern crate log;
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, OnceLock,
    },
};

const MAX_LINES: usize = 1000;

/// Keeps the latest log lines for the in-app log panel and echoes them to stdout.
pub struct Logger {
    pub enabled: AtomicBool,
    pub data: Arc<Mutex<VecDeque<(String, log::Level)>>>,
}

impl Logger {
    pub fn new() -> Self {
        let data = Arc::new(Mutex::new(VecDeque::new()));

        Self {
            enabled: AtomicBool::new(true),
            data,
        }
    }
    pub fn get_color(level: log::Level) -> egui::Color32 {
        match level {
            log::Level::Error => egui::Color32::RED,
            log::Level::Warn => egui::Color32::YELLOW,
            log::Level::Info => egui::Color32::WHITE,
            log::Level::Debug => egui::Color32::DEBUG_COLOR,
            log::Level::Trace => egui::Color32::LIGHT_BLUE,
        }
    }
    /// Newest first.
    pub fn lines(&self) -> Vec<(String, log::Level)> {
        self.data
            .lock()
            .map(|d| d.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.enabled.load(Ordering::Relaxed) && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut txt) = self.data.try_lock() {
            let t = format!(
                "{}:{} -- {}",
                record.level(),
                record.target(),
                record.args()
            );
            println!("{}", t);
            txt.push_front((t, record.level()));
            txt.truncate(MAX_LINES);
        }
    }

    fn flush(&self) {
        if let Ok(mut txt) = self.data.try_lock() {
            txt.clear();
        }
    }
}

pub static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the global logger. Later calls only change the level.
pub fn init(level: log::LevelFilter) -> &'static Logger {
    let logger = GLOBAL_LOGGER.get_or_init(Logger::new);
    let _ = log::set_logger(logger);
    log::set_max_level(level);
    logger
}

#[cfg(test)]
mod test {
    use super::*;
    use log::Log;
    #[test]
    fn keeps_newest_first_and_truncates() {
        log::set_max_level(log::LevelFilter::Trace);
        let logger = Logger::new();
        for i in 0..(MAX_LINES + 5) {
            logger.log(
                &log::Record::builder()
                    .args(format_args!("line {i}"))
                    .level(log::Level::Info)
                    .target("test")
                    .build(),
            );
        }
        let lines = logger.lines();
        assert_eq!(lines.len(), MAX_LINES);
        assert!(lines[0].0.ends_with(&format!("line {}", MAX_LINES + 4)));
    }
    #[test]
    fn disabled_logger_drops_records() {
        let logger = Logger::new();
        logger.enabled.store(false, Ordering::Relaxed);
        logger.log(&log::Record::builder().args(format_args!("x")).level(log::Level::Error).build());
        assert!(logger.lines().is_empty());
    }
}
