use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use prefixlog::file_ops::FileOps;
use prefixlog::{debug, error, info, success, value, warning, Logger};

mod cli;
mod platform;

use cli::{Cli, Command};
use platform::ExitCode;

fn main() {
    let cli = Cli::parse();

    if let Command::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "prefixlog", &mut io::stdout());
        ExitCode::Success.exit();
    }

    let log = cli.logger.build_logger();
    let ok = run(&cli.command, &log);
    ExitCode::from_outcome(ok).exit();
}

/// Execute one command; the result is its success flag
fn run(command: &Command, log: &Logger) -> bool {
    let ops = FileOps::new(log);
    match command {
        Command::Ls { path, recursive } => {
            let dirs = ops.list_subdirectories(path, *recursive);
            print_paths(&dirs);
            path.is_dir()
        }
        Command::Files { path } => {
            let files = ops.list_files(path);
            print_paths(&files);
            path.is_dir()
        }
        Command::Exists { path } => {
            let exists = ops.check_file_exists(path);
            value!(log, "{} exists = {}", path.display(), exists);
            exists
        }
        Command::Touch { path, replace } => ops.create_file(path, *replace),
        Command::Rm { path } => ops.remove_file(path),
        Command::Mv {
            source,
            target,
            replace,
            create,
        } => ops.move_file(source, target, *replace, *create),
        Command::Cp {
            source,
            target,
            replace,
            create,
        } => ops.copy_file(source, target, *replace, *create),
        Command::Rename {
            path,
            name,
            replace,
        } => ops.rename_file(path, name, *replace),
        Command::Demo { message } => {
            run_demo(log, message);
            true
        }
        Command::Completions { .. } => true,
    }
}

fn run_demo(log: &Logger, message: &str) {
    debug!(log, "{}", message);
    value!(log, "{}", message);
    info!(log, "{}", message);
    success!(log, "{}", message);
    warning!(log, "{}", message);
    error!(log, "{}", message);
    log.info("logged through a plain method");
}

fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}
