//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary runtime root, returning it with its canonical path
pub fn create_runtime_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let canonical = fs::canonicalize(temp_dir.path()).unwrap();
    (temp_dir, canonical)
}

/// Create a runtime root with a nested directory, returning the nested path
#[allow(dead_code)]
pub fn create_runtime_subdir(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join(name);
    fs::create_dir(&sub_dir).unwrap();
    (temp_dir, sub_dir)
}

/// Build an invocation with the program name prepended
#[allow(dead_code)]
pub fn invocation(rest: &[&str]) -> Vec<String> {
    std::iter::once("studio")
        .chain(rest.iter().copied())
        .map(String::from)
        .collect()
}
