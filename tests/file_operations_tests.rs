mod common;
use common::*;

use std::fs;

use prefixlog::file_ops::{self, FileOps};
use prefixlog::Logger;
use tempfile::TempDir;

fn debug_logger() -> (Logger, Capture) {
    let (log, out, _diag) = captured(
        Logger::builder()
            .name("FileOperationsLogger")
            .min_level(0)
            .time(false)
            .color(false),
        false,
    );
    (log, out)
}

#[test]
fn test_directory_checks() {
    let (log, out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    assert!(ops.check_is_directory(temp_dir.path()));
    assert!(!ops.check_is_directory(&file));
    assert!(ops.check_directory_exists(temp_dir.path()));
    assert!(!ops.check_directory_exists(temp_dir.path().join("missing")));

    let text = out.text();
    assert!(text.contains("[check_is_directory] [  INFO ]; "));
    assert!(text.contains("is not a directory or does not exist"));
}

#[test]
fn test_string_and_path_inputs_are_equivalent() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("a.txt");
    fs::write(&file, "x").unwrap();

    let as_string = file.to_str().unwrap().to_string();
    assert!(ops.check_file_exists(&file));
    assert!(ops.check_file_exists(as_string.as_str()));
    assert!(ops.check_file_exists(as_string));
    assert_eq!(ops.convert_string_to_path(file.to_str().unwrap()), file);
}

#[test]
fn test_listing() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("one/two")).unwrap();
    fs::create_dir_all(root.join("three")).unwrap();
    fs::write(root.join("top.txt"), "x").unwrap();
    fs::write(root.join("one/nested.txt"), "x").unwrap();

    assert_eq!(
        ops.list_subdirectories(root, false),
        vec![root.join("one"), root.join("three")]
    );
    assert_eq!(
        ops.list_subdirectories(root, true),
        vec![root.join("one"), root.join("one/two"), root.join("three")]
    );
    assert_eq!(ops.list_files(root), vec![root.join("top.txt")]);
    assert_eq!(ops.list_files(root.join("one")), vec![root.join("one/nested.txt")]);
}

#[test]
fn test_listing_invalid_roots_is_empty() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("f.txt");
    fs::write(&file, "x").unwrap();

    assert!(ops.list_subdirectories(temp_dir.path().join("nope"), true).is_empty());
    assert!(ops.list_subdirectories(&file, false).is_empty());
    assert!(ops.list_files(temp_dir.path().join("nope")).is_empty());
    assert!(ops.list_files(&file).is_empty());
}

#[test]
fn test_create_and_remove() {
    let (log, out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("new.txt");

    assert!(ops.create_file(&file, false));
    assert!(file.is_file());
    assert!(!ops.create_file(&file, false), "existing file without replace must fail");
    assert!(ops.create_file(&file, true));

    assert!(ops.remove_file(&file));
    assert!(!file.exists());
    assert!(!ops.remove_file(&file), "removing a missing file must fail");

    let text = out.text();
    assert!(text.contains("[remove_file] [ ERROR ]; Tried to remove file: "));
    assert!(text.contains("[create_file] [SUCCESS]; "));
}

#[test]
fn test_remove_directory_fails() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("d");
    fs::create_dir(&dir).unwrap();
    assert!(!ops.remove_file(&dir));
    assert!(dir.is_dir());
}

#[test]
fn test_move_file() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("src.txt");
    let target = temp_dir.path().join("deep/nested/dst.txt");
    fs::write(&source, "content").unwrap();

    assert!(ops.move_file(&source, &target, false, false));
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&target).unwrap(), "content");
}

#[test]
fn test_copy_file_respects_replace() {
    let (log, out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("src.txt");
    let target = temp_dir.path().join("dst.txt");
    fs::write(&source, "new").unwrap();
    fs::write(&target, "old").unwrap();

    assert!(!ops.copy_file(&source, &target, false, false));
    assert_eq!(fs::read_to_string(&target).unwrap(), "old");
    assert!(out.text().contains("Target already exists and replace not allowed"));

    assert!(ops.copy_file(&source, &target, true, false));
    assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    assert!(source.exists());
}

#[test]
fn test_transfer_rejects_directories_and_missing_sources() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("dir");
    fs::create_dir(&dir).unwrap();
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();

    assert!(!ops.move_file(&dir, temp_dir.path().join("x.txt"), true, true));
    assert!(!ops.copy_file(&file, &dir, true, false));
    assert!(!ops.move_file(temp_dir.path().join("missing.txt"), temp_dir.path().join("out.txt"), false, false));
    assert!(!temp_dir.path().join("out.txt").exists());
    assert!(file.exists());
}

#[test]
fn test_move_missing_source_with_create() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("made.txt");

    assert!(ops.move_file(temp_dir.path().join("missing.txt"), &target, false, true));
    assert!(target.is_file());
    // an existing target is only replaced when allowed
    assert!(!ops.move_file(temp_dir.path().join("missing.txt"), &target, false, true));
}

#[test]
fn test_rename_file() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("a.txt");
    let taken = temp_dir.path().join("b.txt");
    fs::write(&original, "a").unwrap();
    fs::write(&taken, "b").unwrap();

    assert!(!ops.rename_file(&original, "b.txt", false));
    assert_eq!(fs::read_to_string(&taken).unwrap(), "b");

    assert!(ops.rename_file(&original, "b.txt", true));
    assert!(!original.exists());
    assert_eq!(fs::read_to_string(&taken).unwrap(), "a");

    assert!(!ops.rename_file(temp_dir.path().join("ghost.txt"), "c.txt", false));
    assert!(!ops.rename_file(temp_dir.path(), "c", false));
}

#[test]
fn test_shared_free_functions() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("shared.txt");
    let copy = temp_dir.path().join("shared_copy.txt");

    assert!(file_ops::create_file(&file, false));
    assert!(file_ops::check_file_exists(&file));
    assert!(file_ops::copy_file(&file, &copy, false, false));
    assert!(file_ops::rename_file(&copy, "renamed.txt", false));
    assert!(file_ops::check_file_exists(temp_dir.path().join("renamed.txt")));
    assert_eq!(file_ops::list_files(temp_dir.path()).len(), 2);
    assert!(file_ops::list_subdirectories(temp_dir.path(), true).is_empty());
    assert!(file_ops::check_is_directory(temp_dir.path()));
    assert!(file_ops::check_directory_exists(temp_dir.path()));
    assert!(file_ops::move_file(&file, temp_dir.path().join("moved.txt"), false, false));
    assert!(file_ops::remove_file(temp_dir.path().join("moved.txt")));
    assert_eq!(
        file_ops::convert_string_to_path("Test/Test_1/Test_2_file.txt"),
        std::path::PathBuf::from("Test/Test_1/Test_2_file.txt")
    );
    assert_eq!(FileOps::shared().logger().name(), "FileOperationsLogger");
}

#[test]
fn test_transfer_onto_itself_keeps_the_file() {
    let (log, out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("sub")).unwrap();
    let file = temp_dir.path().join("precious.txt");
    fs::write(&file, "precious").unwrap();

    assert!(!ops.copy_file(&file, &file, true, false));
    assert!(!ops.move_file(&file, &file, true, false));
    assert!(!ops.copy_file(&file, temp_dir.path().join("sub/../precious.txt"), true, false));

    assert_eq!(fs::read_to_string(&file).unwrap(), "precious");
    assert!(out.text().contains("Source and target are the same file"));
}

#[test]
fn test_create_file_on_directory_fails() {
    let (log, out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("d");
    fs::create_dir(&dir).unwrap();

    assert!(!ops.create_file(&dir, true));
    assert!(dir.is_dir());
    assert!(!out.text().contains("was successfully replaced"));
}

#[test]
fn test_rename_leaves_only_the_new_name() {
    let (log, out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let original = temp_dir.path().join("a.txt");
    fs::write(&original, "a").unwrap();

    assert!(ops.rename_file(&original, "c.txt", false));
    assert!(!original.exists());
    assert!(temp_dir.path().join("c.txt").is_file());
    assert_eq!(ops.list_files(temp_dir.path()), vec![temp_dir.path().join("c.txt")]);
    assert!(out.text().contains("[rename_file] [SUCCESS]; Successfully renamed file: "));
}

#[test]
fn test_rename_rejects_dot_names() {
    let (log, _out) = debug_logger();
    let ops = FileOps::new(&log);
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("a.txt");
    fs::write(&file, "a").unwrap();

    assert!(!ops.rename_file(&file, "..", true));
    assert!(!ops.rename_file(&file, ".", true));
    assert_eq!(fs::read_to_string(&file).unwrap(), "a");
}
