//! Filesystem helpers that log each step and report success as `bool`.
//!
//! Paths may be given as `&str`, `String`, `&Path` or `PathBuf`. No helper
//! panics or returns an error: failures are logged at error level and turn
//! into `false` (or an empty list). Mutating helpers re-check the filesystem
//! afterwards before reporting success.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::logger::Logger;
use crate::{debug, error, info, success};

pub const SHARED_LOGGER_NAME: &str = "FileOperationsLogger";

/// Logger used by the free functions of this module
static SHARED_LOGGER: Lazy<Logger> = Lazy::new(|| {
    Logger::builder()
        .name(SHARED_LOGGER_NAME)
        .min_level(0)
        .color(true)
        .build()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Move,
    Copy,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transfer::Move => f.write_str("move"),
            Transfer::Copy => f.write_str("copy"),
        }
    }
}

/// Filesystem helpers reporting through a specific logger
#[derive(Debug, Clone, Copy)]
pub struct FileOps<'a> {
    log: &'a Logger,
}

impl<'a> FileOps<'a> {
    pub fn new(log: &'a Logger) -> Self {
        Self { log }
    }

    /// Helpers bound to the shared `FileOperationsLogger`
    pub fn shared() -> FileOps<'static> {
        FileOps::new(&SHARED_LOGGER)
    }

    pub fn logger(&self) -> &'a Logger {
        self.log
    }

    pub fn convert_string_to_path(&self, path: &str) -> PathBuf {
        debug!(self.log, "Converting {} to Path object", path);
        PathBuf::from(path)
    }

    /// True if the path exists and is a directory
    pub fn check_is_directory(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let is_dir = path.is_dir();
        debug!(self.log, "{} is directory = {}", path.display(), is_dir);
        if !is_dir {
            info!(self.log, "{} is not a directory or does not exist", path.display());
        }
        is_dir
    }

    pub fn check_directory_exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                self.log,
                "target directory does not exist. Target directory: ({})",
                path.display()
            );
            return false;
        }
        true
    }

    /// Directories under `root`; all nested ones when `recursive`.
    ///
    /// Returns an empty list when `root` is missing or not a directory.
    pub fn list_subdirectories(&self, root: impl AsRef<Path>, recursive: bool) -> Vec<PathBuf> {
        let root = root.as_ref();
        if !self.searchable(root) {
            return Vec::new();
        }

        match subdirectories(root, recursive) {
            Ok(dirs) => {
                if recursive {
                    debug!(
                        self.log,
                        "found {} directories under {} (recursive)",
                        dirs.len(),
                        root.display()
                    );
                } else {
                    debug!(
                        self.log,
                        "found {} immediate directories under {}",
                        dirs.len(),
                        root.display()
                    );
                }
                dirs
            }
            Err(err) => {
                error!(self.log, "Failed to list directories under {}: {:#}", root.display(), err);
                Vec::new()
            }
        }
    }

    /// Non-directory entries directly under `root`
    pub fn list_files(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        if !self.searchable(root) {
            return Vec::new();
        }

        match child_entries(root) {
            Ok(entries) => {
                let files: Vec<PathBuf> = entries.into_iter().filter(|p| !p.is_dir()).collect();
                debug!(self.log, "found {} files under {}", files.len(), root.display());
                files
            }
            Err(err) => {
                error!(self.log, "Failed to list files under {}: {:#}", root.display(), err);
                Vec::new()
            }
        }
    }

    /// True if the path exists and is not a directory
    pub fn check_file_exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if !path.exists() {
            debug!(self.log, "File does not exist at path: {}", path.display());
            return false;
        }
        if path.is_dir() {
            debug!(self.log, "Requested file is a directory: {}", path.display());
            return false;
        }
        true
    }

    pub fn remove_file(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        info!(self.log, "Trying to remove file: {}", path.display());
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                error!(
                    self.log,
                    "Tried to remove file: {} but file does not exist",
                    path.display()
                );
                return false;
            }
            Err(err) => {
                error!(self.log, "Failed to remove file: {} due to: {}", path.display(), err);
                return false;
            }
        }

        if path.exists() {
            error!(self.log, "Failed to remove file: {}", path.display());
            return false;
        }
        success!(self.log, "Successfully removed {}", path.display());
        true
    }

    /// Create an empty file like `touch`; an existing file is only touched when `replace_existing`
    pub fn create_file(&self, path: impl AsRef<Path>, replace_existing: bool) -> bool {
        let path = path.as_ref();
        info!(self.log, "Trying to create file: {}", path.display());
        let existed = path.exists();
        if existed && !replace_existing {
            error!(
                self.log,
                "File: {} already exists and replace files is: false.",
                path.display()
            );
            return false;
        }
        if existed {
            info!(self.log, "File: {} already exists and will be replaced", path.display());
        }

        if let Err(err) = touch(path) {
            error!(self.log, "Failed to create file due to: {:#}", err);
            return false;
        }
        if !path.is_file() {
            error!(self.log, "File: {} is missing after creation", path.display());
            return false;
        }

        if existed {
            success!(self.log, "File: {} was successfully replaced", path.display());
        } else {
            success!(self.log, "File: {} was successfully created", path.display());
        }
        true
    }

    pub fn move_file(
        &self,
        source: impl AsRef<Path>,
        target: impl AsRef<Path>,
        replace_existing_target: bool,
        create_if_missing: bool,
    ) -> bool {
        self.transfer(
            source.as_ref(),
            target.as_ref(),
            Transfer::Move,
            replace_existing_target,
            create_if_missing,
        )
    }

    pub fn copy_file(
        &self,
        source: impl AsRef<Path>,
        target: impl AsRef<Path>,
        replace_existing_target: bool,
        create_if_missing: bool,
    ) -> bool {
        self.transfer(
            source.as_ref(),
            target.as_ref(),
            Transfer::Copy,
            replace_existing_target,
            create_if_missing,
        )
    }

    /// Rename a file inside its own directory; `name` is a bare file name
    pub fn rename_file(&self, path: impl AsRef<Path>, name: &str, replace_existing: bool) -> bool {
        let path = path.as_ref();
        let new_path = match path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        };
        info!(self.log, "Attempting to rename: {} -> {}", path.display(), new_path.display());

        if !is_bare_file_name(name) {
            error!(self.log, "Invalid file name: '{}'", name);
            return false;
        }
        if !path.exists() {
            error!(self.log, "File: {} does not exist.", path.display());
            return false;
        }
        if path.is_dir() {
            error!(
                self.log,
                "Path: {} is a directory and cannot be renamed as a file.",
                path.display()
            );
            return false;
        }
        if new_path.exists() {
            if !replace_existing {
                error!(self.log, "Target file already exists: {}", new_path.display());
                return false;
            }
            info!(
                self.log,
                "File with the same name already exists: {}, file will be replaced",
                new_path.display()
            );
            if !self.remove_file(&new_path) {
                error!(
                    self.log,
                    "Cannot rename file: {} due to error during deletion of the existing file with the same name.",
                    new_path.display()
                );
                return false;
            }
        }

        if let Err(err) = fs::rename(path, &new_path) {
            error!(
                self.log,
                "Failed to rename file: {} to {} due to: {}",
                path.display(),
                new_path.display(),
                err
            );
            return false;
        }
        if path.exists() || !new_path.is_file() {
            error!(
                self.log,
                "Rename failed: source exists={}, target exists={}",
                path.exists(),
                new_path.is_file()
            );
            return false;
        }
        success!(
            self.log,
            "Successfully renamed file: {} to {}",
            path.display(),
            new_path.display()
        );
        true
    }

    fn searchable(&self, root: &Path) -> bool {
        if !root.exists() {
            debug!(self.log, "search path does not exist: {}", root.display());
            return false;
        }
        if !root.is_dir() {
            debug!(self.log, "search path is not a directory: {}", root.display());
            return false;
        }
        true
    }

    fn transfer(
        &self,
        source: &Path,
        target: &Path,
        op: Transfer,
        replace_existing_target: bool,
        create_if_missing: bool,
    ) -> bool {
        info!(
            self.log,
            "Attempting to {} file: {} -> {}",
            op,
            source.display(),
            target.display()
        );
        let source_exists = self.check_file_exists(source);
        let target_exists = self.check_file_exists(target);

        if source.is_dir() {
            error!(self.log, "Source is a directory: {}", source.display());
            return false;
        }
        if target.is_dir() {
            error!(self.log, "Target is a directory: {}", target.display());
            return false;
        }

        if !source_exists {
            if create_if_missing {
                if !self.create_file(target, replace_existing_target) {
                    error!(self.log, "Failed to create target file: {}", target.display());
                    return false;
                }
                success!(
                    self.log,
                    "Created target file {} because source did not exist",
                    target.display()
                );
                return true;
            }
            error!(self.log, "Source file does not exist: {}", source.display());
            return false;
        }

        if target_exists && same_file(source, target) {
            error!(
                self.log,
                "Source and target are the same file: {}",
                source.display()
            );
            return false;
        }

        if target_exists {
            if !replace_existing_target {
                error!(
                    self.log,
                    "Target already exists and replace not allowed: {}",
                    target.display()
                );
                return false;
            }
            if let Err(err) = fs::remove_file(target) {
                error!(
                    self.log,
                    "Failed to remove existing target {}: {}",
                    target.display(),
                    err
                );
                return false;
            }
        }

        if let Err(err) = ensure_parent_dir(target) {
            error!(self.log, "{:#}", err);
            return false;
        }

        let outcome = match op {
            Transfer::Move => move_path(source, target),
            Transfer::Copy => copy_path(source, target),
        };
        if let Err(err) = outcome {
            error!(
                self.log,
                "Failed to {} file: {} -> {}: {:#}",
                op,
                source.display(),
                target.display(),
                err
            );
            return false;
        }

        match op {
            Transfer::Move if source.exists() || !target.exists() => {
                error!(
                    self.log,
                    "Move failed: source exists={}, target exists={}",
                    source.exists(),
                    target.exists()
                );
                return false;
            }
            Transfer::Copy if !target.exists() => {
                error!(
                    self.log,
                    "Copy failed: target does not exist after copy: {}",
                    target.display()
                );
                return false;
            }
            _ => {}
        }

        success!(
            self.log,
            "Successful {} of file: {} -> {}",
            op,
            source.display(),
            target.display()
        );
        true
    }
}

fn child_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}

fn subdirectories(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for path in child_entries(&dir)? {
            if !path.is_dir() {
                continue;
            }
            // descend into real directories only, so symlink loops terminate
            let is_real_dir = fs::symlink_metadata(&path)
                .map(|meta| meta.is_dir())
                .unwrap_or(false);
            if recursive && is_real_dir {
                pending.push(path.clone());
            }
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn touch(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.set_modified(SystemTime::now())
        .with_context(|| format!("failed to update modification time of {}", path.display()))?;
    Ok(())
}

fn ensure_parent_dir(target: &Path) -> Result<()> {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| {
                format!(
                    "Failed to ensure parent directory for target {}",
                    target.display()
                )
            }),
        _ => Ok(()),
    }
}

fn move_path(source: &Path, target: &Path) -> Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(err) if crosses_devices(&err) => {
            copy_path(source, target)?;
            if let Err(err) = fs::remove_file(source) {
                // leave no duplicate behind
                let _ = fs::remove_file(target);
                return Err(err)
                    .with_context(|| format!("failed to remove {} after copying", source.display()));
            }
            Ok(())
        }
        Err(err) => Err(err).with_context(|| {
            format!(
                "failed to rename {} to {}",
                source.display(),
                target.display()
            )
        }),
    }
}

/// `rename` cannot cross filesystems
fn crosses_devices(err: &io::Error) -> bool {
    #[cfg(windows)]
    const CROSS_DEVICE: i32 = 17; // ERROR_NOT_SAME_DEVICE
    #[cfg(not(windows))]
    const CROSS_DEVICE: i32 = 18; // EXDEV
    err.raw_os_error() == Some(CROSS_DEVICE)
}

/// Whether both paths name the same file on disk
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// A single normal path component: no separators, `.` or `..`
fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.ends_with(std::path::MAIN_SEPARATOR)
}

fn copy_path(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).with_context(|| {
        format!(
            "failed to copy {} to {}",
            source.display(),
            target.display()
        )
    })?;
    Ok(())
}

pub fn convert_string_to_path(path: &str) -> PathBuf {
    FileOps::shared().convert_string_to_path(path)
}

pub fn check_is_directory(path: impl AsRef<Path>) -> bool {
    FileOps::shared().check_is_directory(path)
}

pub fn check_directory_exists(path: impl AsRef<Path>) -> bool {
    FileOps::shared().check_directory_exists(path)
}

pub fn list_subdirectories(root: impl AsRef<Path>, recursive: bool) -> Vec<PathBuf> {
    FileOps::shared().list_subdirectories(root, recursive)
}

pub fn list_files(root: impl AsRef<Path>) -> Vec<PathBuf> {
    FileOps::shared().list_files(root)
}

pub fn check_file_exists(path: impl AsRef<Path>) -> bool {
    FileOps::shared().check_file_exists(path)
}

pub fn remove_file(path: impl AsRef<Path>) -> bool {
    FileOps::shared().remove_file(path)
}

pub fn create_file(path: impl AsRef<Path>, replace_existing: bool) -> bool {
    FileOps::shared().create_file(path, replace_existing)
}

pub fn move_file(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
    replace_existing_target: bool,
    create_if_missing: bool,
) -> bool {
    FileOps::shared().move_file(source, target, replace_existing_target, create_if_missing)
}

pub fn copy_file(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
    replace_existing_target: bool,
    create_if_missing: bool,
) -> bool {
    FileOps::shared().copy_file(source, target, replace_existing_target, create_if_missing)
}

pub fn rename_file(path: impl AsRef<Path>, name: &str, replace_existing: bool) -> bool {
    FileOps::shared().rename_file(path, name, replace_existing)
}
