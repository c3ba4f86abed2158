use clap::ValueEnum;

pub const DEFAULT_LOGGER_NAME: &str = "UNNAMED_LOGGER";
pub const DEFAULT_MIN_LEVEL: i32 = 2;

/// Formatting and filtering options of one logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub name: String,
    /// Messages below this level are discarded; valid range is 0..=5
    pub min_level: i32,
    pub include_date: bool,
    pub include_time: bool,
    pub include_name: bool,
    pub include_caller: bool,
    pub include_level: bool,
    /// Colorize the level label when the terminal supports it
    pub color: bool,
    /// Emit the logger's own diagnostics to the diagnostic channel
    pub internal_debug: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            min_level: DEFAULT_MIN_LEVEL,
            include_date: false,
            include_time: true,
            include_name: true,
            include_caller: true,
            include_level: true,
            color: true,
            internal_debug: false,
        }
    }
}

impl LoggerConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// One-line rendering used by the construction diagnostics
    pub fn describe(&self) -> String {
        format!(
            "name={}, min_level={}, include_date={}, include_time={}, include_name={}, include_caller={}, include_level={}, color={}, internal_debug={}",
            self.name,
            self.min_level,
            self.include_date,
            self.include_time,
            self.include_name,
            self.include_caller,
            self.include_level,
            self.color,
            self.internal_debug,
        )
    }
}

/// Per-call replacements for the stored formatting flags.
///
/// `None` keeps the logger's own setting. Overrides affect one prefix only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixOverrides {
    pub include_date: Option<bool>,
    pub include_time: Option<bool>,
    pub include_name: Option<bool>,
    pub include_caller: Option<bool>,
    pub include_level: Option<bool>,
    pub color: Option<bool>,
}

impl PrefixOverrides {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn date(mut self, on: bool) -> Self {
        self.include_date = Some(on);
        self
    }

    pub fn time(mut self, on: bool) -> Self {
        self.include_time = Some(on);
        self
    }

    pub fn name(mut self, on: bool) -> Self {
        self.include_name = Some(on);
        self
    }

    pub fn caller(mut self, on: bool) -> Self {
        self.include_caller = Some(on);
        self
    }

    pub fn level(mut self, on: bool) -> Self {
        self.include_level = Some(on);
        self
    }

    pub fn color(mut self, on: bool) -> Self {
        self.color = Some(on);
        self
    }

    /// Effective flags after falling back to `config` for every unset override
    pub fn resolve(&self, config: &LoggerConfig) -> Segments {
        Segments {
            date: self.include_date.unwrap_or(config.include_date),
            time: self.include_time.unwrap_or(config.include_time),
            name: self.include_name.unwrap_or(config.include_name),
            caller: self.include_caller.unwrap_or(config.include_caller),
            level: self.include_level.unwrap_or(config.include_level),
            color: self.color.unwrap_or(config.color),
        }
    }
}

/// Flags in effect for a single prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    pub date: bool,
    pub time: bool,
    pub name: bool,
    pub caller: bool,
    pub level: bool,
    pub color: bool,
}

/// Color output mode
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
