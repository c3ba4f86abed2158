// CLI-specific types and structures
// This module contains the command-line interface definitions and their mapping onto logger configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prefixlog::{Capabilities, ColorMode, Logger, LoggerBuilder, LoggerConfig};

#[derive(Parser, Debug)]
#[command(name = "prefixlog")]
#[command(about = "Filesystem helpers with leveled, prefixed console logging")]
#[command(
    long_about = "Filesystem helpers with leveled, prefixed console logging\n\nEvery step is logged as\n  [HH:MM:SS.mmm] [name] [caller] [LEVEL]; message\n\nLEVELS:\n  0 DEBUG, 1 VALUE, 2 INFO, 3 SUCCESS, 4 WARNING, 5 ERROR\n\nCOMMON EXAMPLES:\n  prefixlog --min-level 0 ls --recursive ./data\n  prefixlog mv --replace notes.txt archive/notes.txt\n  prefixlog --date --color never demo"
)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub logger: LoggerArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct LoggerArgs {
    /// Logger name shown in the name segment
    #[arg(
        long = "name",
        default_value = "prefixlog",
        global = true,
        help_heading = "Logger Options"
    )]
    pub name: String,

    /// Minimum level to print (0=DEBUG .. 5=ERROR); out-of-range values fall back to 0
    #[arg(
        short = 'l',
        long = "min-level",
        default_value_t = 2,
        allow_negative_numbers = true,
        global = true,
        help_heading = "Logger Options"
    )]
    pub min_level: i32,

    /// Include the date in the prefix
    #[arg(long = "date", global = true, help_heading = "Logger Options")]
    pub date: bool,

    /// Omit the time from the prefix
    #[arg(long = "no-time", global = true, help_heading = "Logger Options")]
    pub no_time: bool,

    /// Omit the logger name from the prefix
    #[arg(long = "no-name", global = true, help_heading = "Logger Options")]
    pub no_name: bool,

    /// Omit the calling function from the prefix
    #[arg(long = "no-caller", global = true, help_heading = "Logger Options")]
    pub no_caller: bool,

    /// Omit the severity label from the prefix
    #[arg(long = "no-level", global = true, help_heading = "Logger Options")]
    pub no_level: bool,

    /// Colorize severity labels
    #[arg(
        long = "color",
        value_enum,
        default_value = "auto",
        global = true,
        help_heading = "Logger Options"
    )]
    pub color: ColorMode,

    /// Print the logger's own diagnostics to stderr
    #[arg(long = "logger-debug", global = true, help_heading = "Logger Options")]
    pub logger_debug: bool,
}

impl LoggerArgs {
    /// Logger configuration and capabilities for these options.
    ///
    /// `auto` only asks for color when it is available, so it never warns;
    /// `always` asks unconditionally and warns when color cannot be shown.
    pub fn resolve(&self) -> (LoggerConfig, Capabilities) {
        let capabilities = Capabilities::with_mode(&self.color);
        let color = match self.color {
            ColorMode::Auto => capabilities.color,
            ColorMode::Always => true,
            ColorMode::Never => false,
        };

        let config = LoggerConfig {
            name: self.name.clone(),
            min_level: self.min_level,
            include_date: self.date,
            include_time: !self.no_time,
            include_name: !self.no_name,
            include_caller: !self.no_caller,
            include_level: !self.no_level,
            color,
            internal_debug: self.logger_debug,
        };
        (config, capabilities)
    }

    pub fn build_logger(&self) -> Logger {
        let (config, capabilities) = self.resolve();
        LoggerBuilder::from_config(config)
            .capabilities(capabilities)
            .build()
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List subdirectories of a directory
    Ls {
        path: PathBuf,
        /// Include nested subdirectories
        #[arg(short = 'r', long = "recursive")]
        recursive: bool,
    },

    /// List files directly inside a directory
    Files { path: PathBuf },

    /// Check that a path is an existing file
    Exists { path: PathBuf },

    /// Create an empty file
    Touch {
        path: PathBuf,
        /// Touch the file again if it already exists
        #[arg(long = "replace")]
        replace: bool,
    },

    /// Delete a file
    Rm { path: PathBuf },

    /// Move a file
    Mv {
        source: PathBuf,
        target: PathBuf,
        /// Overwrite an existing target
        #[arg(long = "replace")]
        replace: bool,
        /// Create an empty target when the source is missing
        #[arg(long = "create")]
        create: bool,
    },

    /// Copy a file
    Cp {
        source: PathBuf,
        target: PathBuf,
        /// Overwrite an existing target
        #[arg(long = "replace")]
        replace: bool,
        /// Create an empty target when the source is missing
        #[arg(long = "create")]
        create: bool,
    },

    /// Rename a file within its directory
    Rename {
        path: PathBuf,
        /// New file name (not a path)
        name: String,
        /// Replace a file that already has the new name
        #[arg(long = "replace")]
        replace: bool,
    },

    /// Log a message at every level
    Demo {
        #[arg(default_value = "hello")]
        message: String,
    },

    /// Print a shell completion script
    Completions { shell: clap_complete::Shell },
}
