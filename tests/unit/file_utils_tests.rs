/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use epgtidy::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that ensure_dir creates nested directories as needed
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// Test that write_atomic creates parent directories and writes content
#[test]
fn test_write_atomic_withMissingParent_shouldCreateAndWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("public").join("guide.xml.gz");

    FileManager::write_atomic(&output, b"payload")?;

    assert!(FileManager::file_exists(&output));
    assert_eq!(fs::read(&output)?, b"payload");
    Ok(())
}

/// Test that write_atomic replaces an existing file and leaves no temp files
#[test]
fn test_write_atomic_withExistingFile_shouldReplaceContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = common::create_test_file(temp_dir.path(), "guide.xml.gz", b"old")?;

    FileManager::write_atomic(&output, b"new")?;

    assert_eq!(fs::read(&output)?, b"new");
    let entries = fs::read_dir(temp_dir.path())?.count();
    assert_eq!(entries, 1);
    Ok(())
}
