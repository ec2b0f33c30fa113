use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Routes `log` records to the browser console.
///
/// The shared crate logs through the `log` facade; installing this logger
/// makes those records visible in the devtools console, tagged with the
/// record target (module path or component name).
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. Call once, before mounting the app.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }

    pub fn format_record(record: &Record) -> String {
        format!("[{}] {}", record.target(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_record(record);
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_record_includes_component() {
        assert_eq!(
            Logger::format_record(
                &Record::builder()
                    .args(format_args!("selected {}", "2024-03-15"))
                    .target("calendar")
                    .level(Level::Info)
                    .build()
            ),
            "[calendar] selected 2024-03-15"
        );
    }

    #[wasm_bindgen_test]
    fn test_enabled_follows_max_level() {
        log::set_max_level(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("calendar").build();
        let debug = Metadata::builder().level(Level::Debug).target("calendar").build();
        assert!(LOGGER.enabled(&warn));
        assert!(!LOGGER.enabled(&debug));
    }
}
