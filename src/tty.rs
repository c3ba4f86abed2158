use crate::config::ColorMode;
use is_terminal::IsTerminal;
use once_cell::sync::Lazy;

/// Optional features usable in this process, resolved once and read-only afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub color: bool,
}

static DETECTED: Lazy<Capabilities> = Lazy::new(|| Capabilities::with_mode(&ColorMode::Auto));

impl Capabilities {
    /// Capabilities detected from the environment on first use
    pub fn global() -> Capabilities {
        *DETECTED
    }

    /// Resolve capabilities for an explicit color mode
    pub fn with_mode(color_mode: &ColorMode) -> Self {
        Self {
            color: color_compiled_in() && should_use_colors_with_mode(color_mode),
        }
    }

    pub fn none() -> Self {
        Self { color: false }
    }
}

fn color_compiled_in() -> bool {
    cfg!(feature = "color")
}

/// Check if stdout is connected to a TTY
pub fn is_stdout_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Determine if colors should be used based on the color mode and environment
pub fn should_use_colors_with_mode(color_mode: &ColorMode) -> bool {
    match color_mode {
        ColorMode::Never => false,
        ColorMode::Always => {
            // Even with Always, respect NO_COLOR for accessibility
            std::env::var_os("NO_COLOR").is_none()
        }
        ColorMode::Auto => should_use_colors_auto(),
    }
}

fn should_use_colors_auto() -> bool {
    // Respect NO_COLOR (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // FORCE_COLOR for CI environments that render ANSI
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    is_stdout_tty()
}
