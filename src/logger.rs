//! Leveled console logger.
//!
//! Every emitted line is `<prefix><body>`, where the prefix is built from the
//! enabled segments in fixed order:
//!
//! ```text
//! [DD-MM-YYYY HH:MM:SS.mmm] [name] [caller] [  INFO ]; body
//! ```
//!
//! Configuration is resolved once at construction. Invalid settings never
//! fail: they are reported and replaced with safe defaults.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDateTime};

use crate::caller::{self, Caller};
use crate::colors::ColorScheme;
use crate::config::{LoggerConfig, PrefixOverrides};
use crate::level::Severity;
use crate::tty::Capabilities;

/// Tag opening every line on the diagnostic channel
pub const DIAGNOSTIC_TAG: &str = "[LOGGER_DEBUG]";
pub const ERROR_TAG: &str = "[LOGGER_ERROR]";
pub const WARNING_TAG: &str = "[LOGGER_WARNING]";

type Channel = Mutex<Box<dyn Write + Send>>;

pub struct Logger {
    config: LoggerConfig,
    color_available: bool,
    colors: ColorScheme,
    output: Channel,
    diagnostics: Channel,
}

/// Builder for [`Logger`]; unset options keep the [`LoggerConfig`] defaults
pub struct LoggerBuilder {
    config: LoggerConfig,
    capabilities: Option<Capabilities>,
    output: Option<Box<dyn Write + Send>>,
    diagnostics: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            capabilities: None,
            output: None,
            diagnostics: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn min_level(mut self, level: impl Into<i32>) -> Self {
        self.config.min_level = level.into();
        self
    }

    pub fn date(mut self, on: bool) -> Self {
        self.config.include_date = on;
        self
    }

    pub fn time(mut self, on: bool) -> Self {
        self.config.include_time = on;
        self
    }

    pub fn show_name(mut self, on: bool) -> Self {
        self.config.include_name = on;
        self
    }

    pub fn caller(mut self, on: bool) -> Self {
        self.config.include_caller = on;
        self
    }

    pub fn level(mut self, on: bool) -> Self {
        self.config.include_level = on;
        self
    }

    pub fn color(mut self, on: bool) -> Self {
        self.config.color = on;
        self
    }

    pub fn internal_debug(mut self, on: bool) -> Self {
        self.config.internal_debug = on;
        self
    }

    /// Use these capabilities instead of the process-wide detected ones
    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Replace stdout as the output channel
    pub fn output(mut self, writer: impl Write + Send + 'static) -> Self {
        self.output = Some(Box::new(writer));
        self
    }

    /// Replace stderr as the diagnostic channel
    pub fn diagnostics(mut self, writer: impl Write + Send + 'static) -> Self {
        self.diagnostics = Some(Box::new(writer));
        self
    }

    pub fn build(self) -> Logger {
        let capabilities = self.capabilities.unwrap_or_else(Capabilities::global);
        let output = self.output.unwrap_or_else(|| Box::new(io::stdout()));
        let diagnostics = self.diagnostics.unwrap_or_else(|| Box::new(io::stderr()));
        Logger::construct(
            self.config,
            capabilities,
            Mutex::new(output),
            Mutex::new(diagnostics),
        )
    }
}

impl Logger {
    /// Logger writing to stdout/stderr with the detected capabilities
    pub fn new(config: LoggerConfig) -> Self {
        LoggerBuilder::from_config(config).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::from_config(LoggerConfig::default())
    }

    fn construct(
        mut config: LoggerConfig,
        capabilities: Capabilities,
        output: Channel,
        diagnostics: Channel,
    ) -> Self {
        if config.internal_debug {
            let name = config.name.clone();
            write_line(
                &diagnostics,
                &diagnostic_line(&name, &format!("Debug mode for logger {} set to true", name)),
            );
            write_line(
                &diagnostics,
                &diagnostic_line(&name, &format!("args: {}", config.describe())),
            );
        }

        if Severity::from_raw(config.min_level).is_none() {
            write_line(
                &output,
                &format!(
                    "{}[{}]; Invalid min_level {} (expected {}..={}), using {}",
                    ERROR_TAG,
                    config.name,
                    config.min_level,
                    Severity::MIN_RAW,
                    Severity::MAX_RAW,
                    Severity::MIN_RAW,
                ),
            );
            config.min_level = Severity::MIN_RAW;
        }

        if config.color && !capabilities.color {
            write_line(
                &output,
                &format!(
                    "{}[{}]; Color output requested but not available, continuing without color",
                    WARNING_TAG, config.name
                ),
            );
            config.color = false;
        }

        Logger {
            config,
            color_available: capabilities.color,
            colors: ColorScheme::new(capabilities.color),
            output,
            diagnostics,
        }
    }

    /// Resolved configuration
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn color_available(&self) -> bool {
        self.color_available
    }

    /// Whether a message at `level` passes the threshold
    pub fn is_enabled(&self, level: i32) -> bool {
        level >= self.config.min_level
    }

    /// Build the prefix for a message at `level`, stamped with the current local time
    pub fn build_prefix(&self, level: i32, caller: Caller, overrides: &PrefixOverrides) -> String {
        self.build_prefix_at(level, caller, overrides, Local::now().naive_local())
    }

    /// Build the prefix with an explicit timestamp
    pub fn build_prefix_at(
        &self,
        level: i32,
        caller: Caller,
        overrides: &PrefixOverrides,
        now: NaiveDateTime,
    ) -> String {
        let severity = self.label_severity(level);
        let segments = overrides.resolve(&self.config);

        let mut parts: Vec<String> = Vec::with_capacity(4);
        match (segments.date, segments.time) {
            (true, true) => parts.push(format!("[{}]", now.format("%d-%m-%Y %H:%M:%S%.3f"))),
            (true, false) => parts.push(format!("[{}]", now.format("%d-%m-%Y"))),
            (false, true) => parts.push(format!("[{}]", now.format("%H:%M:%S%.3f"))),
            (false, false) => {}
        }
        if segments.name {
            parts.push(format!("[{}]", self.config.name));
        }
        if segments.caller {
            parts.push(format!("[{}]", caller));
        }
        if segments.level {
            // a color override cannot bring color back once it is unavailable
            let label = if segments.color && self.color_available {
                self.colors.paint_label(severity)
            } else {
                severity.label().to_string()
            };
            parts.push(format!("[{}]", label));
        }

        format!("{}; ", parts.join(" "))
    }

    /// Severity whose label represents `level`; out-of-range levels are reported and clamped
    fn label_severity(&self, level: i32) -> Severity {
        match Severity::from_raw(level) {
            Some(severity) => severity,
            None => {
                self.diagnostic(&format!(
                    "Encountered invalid message level {} during prefix construction",
                    level
                ));
                Severity::clamped(level)
            }
        }
    }

    /// Emit `body` at `level`, attributing the line to the calling function found on the stack
    pub fn log_message(&self, body: &str, level: i32) {
        if !self.passes_threshold(level) {
            return;
        }
        let caller = if self.config.include_caller {
            caller::from_stack()
        } else {
            Caller::TopLevel
        };
        self.emit(body, level, caller);
    }

    /// Emit `body` at `level`, attributing the line to `caller`
    pub fn log_from(&self, body: &str, level: i32, caller: Caller) {
        if self.passes_threshold(level) {
            self.emit(body, level, caller);
        }
    }

    fn passes_threshold(&self, level: i32) -> bool {
        if self.is_enabled(level) {
            return true;
        }
        if self.config.internal_debug {
            self.diagnostic(&format!(
                "log level {} is lower than set logger level {}. Message will be discarded",
                level, self.config.min_level
            ));
        }
        false
    }

    fn emit(&self, body: &str, level: i32, caller: Caller) {
        let prefix = self.build_prefix(level, caller, &PrefixOverrides::none());
        write_line(&self.output, &format!("{}{}", prefix, body));
    }

    pub fn debug(&self, body: &str) {
        self.log_message(body, Severity::Debug.as_raw());
    }

    pub fn value(&self, body: &str) {
        self.log_message(body, Severity::Value.as_raw());
    }

    pub fn info(&self, body: &str) {
        self.log_message(body, Severity::Info.as_raw());
    }

    pub fn success(&self, body: &str) {
        self.log_message(body, Severity::Success.as_raw());
    }

    pub fn warning(&self, body: &str) {
        self.log_message(body, Severity::Warning.as_raw());
    }

    pub fn error(&self, body: &str) {
        self.log_message(body, Severity::Error.as_raw());
    }

    /// Write one line to the diagnostic channel
    fn diagnostic(&self, message: &str) {
        write_line(&self.diagnostics, &diagnostic_line(&self.config.name, message));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("color_available", &self.color_available)
            .finish_non_exhaustive()
    }
}

fn diagnostic_line(logger_name: &str, message: &str) -> String {
    format!("{}[{}]; {}", DIAGNOSTIC_TAG, logger_name, message)
}

/// Write a whole line under the channel lock and flush it.
///
/// Write errors are dropped: a failing stream never fails the caller.
fn write_line(channel: &Channel, line: &str) {
    let mut writer = channel.lock().unwrap_or_else(PoisonError::into_inner);
    let _ = writeln!(writer, "{}", line);
    let _ = writer.flush();
}
