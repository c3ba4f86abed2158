//! Caller identity for the prefix's caller segment.
//!
//! The logging macros capture identity at the call site: they expand
//! [`function_name!`](crate::function_name) inside the calling function.
//! Plain logger methods have no call-site tag, so they walk the stack with
//! [`from_stack`] and take the first frame above the logger itself.
//! Either way the recorded name never belongs to the logger.

use std::borrow::Cow;
use std::fmt;

/// Placeholder rendered when no calling function is known
pub const TOP_LEVEL: &str = "<module>";

/// Symbol path shared by every `Logger` method frame
const LOGGER_FRAME: &str = "prefixlog::logger::Logger";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Caller {
    /// Name of the function that issued the logging call
    Named(Cow<'static, str>),
    /// No enclosing function recorded
    #[default]
    TopLevel,
}

impl Caller {
    pub fn named(name: &'static str) -> Self {
        if name.is_empty() {
            Caller::TopLevel
        } else {
            Caller::Named(Cow::Borrowed(name))
        }
    }

    /// Caller from a symbol name resolved at runtime
    pub fn resolved(symbol: &str) -> Self {
        let name = function_name_from_symbol(symbol);
        if name.is_empty() {
            Caller::TopLevel
        } else {
            Caller::Named(Cow::Owned(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Caller::Named(name) => name,
            Caller::TopLevel => TOP_LEVEL,
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduce the type path of a marker fn nested in a function to that function's name.
///
/// `app::jobs::run::{{closure}}::__marker` becomes `run`.
pub fn function_name_from_path(path: &'static str) -> &'static str {
    last_function_segment(path.strip_suffix("::__marker").unwrap_or(path))
}

/// Reduce a demangled symbol name to the function it names.
///
/// Hash suffixes and closure layers are dropped:
/// `app::jobs::run::{{closure}}::h0123456789abcdef` becomes `run`.
pub fn function_name_from_symbol(symbol: &str) -> &str {
    let trimmed = match symbol.rsplit_once("::") {
        Some((head, tail)) if is_symbol_hash(tail) => head,
        _ => symbol,
    };
    last_function_segment(trimmed)
}

/// Name of the first function above the logger on the current call stack.
///
/// Falls back to [`Caller::TopLevel`] when no frame above the logger resolves
/// to a symbol, e.g. in binaries stripped of symbols.
pub fn from_stack() -> Caller {
    let mut inside_logger = false;
    let mut found: Option<Caller> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            let Some(name) = symbol.name() else {
                return;
            };
            let name = format!("{:#}", name);
            if name.contains(LOGGER_FRAME) {
                inside_logger = true;
            } else if inside_logger {
                found = Some(Caller::resolved(&name));
            }
        });
        found.is_none()
    });

    found.unwrap_or_default()
}

fn last_function_segment(path: &str) -> &str {
    let mut trimmed = path;
    loop {
        if let Some(outer) = trimmed.strip_suffix("::{{closure}}") {
            trimmed = outer;
            continue;
        }
        // v0 mangling renders closures as `{closure#N}`
        match trimmed.rsplit_once("::") {
            Some((outer, last)) if last.starts_with("{closure#") => trimmed = outer,
            _ => break,
        }
    }
    trimmed.rsplit("::").next().unwrap_or("")
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}
