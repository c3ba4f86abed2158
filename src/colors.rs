use crate::level::Severity;

/// ANSI styles for the severity label segment
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub debug: &'static str,   // Bright white
    pub value: &'static str,   // Magenta
    pub info: &'static str,    // Cyan
    pub success: &'static str, // Bright green
    pub warning: &'static str, // Yellow
    pub error: &'static str,   // Black bold on red background
    pub fg_reset: &'static str,
    pub reset: &'static str,
}

impl ColorScheme {
    /// Create the label color scheme; all styles are empty when colors are off
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                debug: "\x1b[97m",
                value: "\x1b[35m",
                info: "\x1b[36m",
                success: "\x1b[92m",
                warning: "\x1b[33m",
                error: "\x1b[41m\x1b[1m\x1b[30m",
                fg_reset: "\x1b[39m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                debug: "",
                value: "",
                info: "",
                success: "",
                warning: "",
                error: "",
                fg_reset: "",
                reset: "",
            }
        }
    }

    /// Opening style and the matching reset for a severity
    pub fn style_for(&self, severity: Severity) -> (&'static str, &'static str) {
        match severity {
            Severity::Debug => (self.debug, self.fg_reset),
            Severity::Value => (self.value, self.fg_reset),
            Severity::Info => (self.info, self.fg_reset),
            Severity::Success => (self.success, self.fg_reset),
            Severity::Warning => (self.warning, self.fg_reset),
            // background and brightness change too, so reset everything
            Severity::Error => (self.error, self.reset),
        }
    }

    /// Label for `severity` wrapped in its style and reset
    pub fn paint_label(&self, severity: Severity) -> String {
        let (open, close) = self.style_for(severity);
        format!("{}{}{}", open, severity.label(), close)
    }
}
