//! Leveled console logging with timestamp, name, caller and severity prefixes,
//! plus filesystem helpers that report every step through a logger.
//!
//! ```
//! use prefixlog::Logger;
//!
//! let log = Logger::builder().name("TestLogger").min_level(1).build();
//! prefixlog::info!(log, "Starting testing...");
//! log.value("caller found on the stack");
//! ```

pub mod caller;
pub mod colors;
pub mod config;
pub mod file_ops;
pub mod level;
pub mod logger;
pub mod tty;

mod macros;

pub use caller::Caller;
pub use config::{ColorMode, LoggerConfig, PrefixOverrides};
pub use level::Severity;
pub use logger::{Logger, LoggerBuilder};
pub use tty::Capabilities;
