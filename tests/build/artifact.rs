//! The persisted index file.

use std::fs;

use super::common::campus;
use locus::binary::{index_path, inspect_index, read_index, write_index, HEADER_SIZE};
use locus::{compose, search, IndexFileError};

#[test]
fn test_written_index_answers_like_the_original() {
    let tmp = tempfile::tempdir().unwrap();
    write_index(tmp.path(), &campus()).unwrap();
    let loaded = read_index(tmp.path()).unwrap();

    for raw in ["lib", "A1", "אול", "cafetiria"] {
        assert_eq!(search(&loaded, &compose(raw)), search(&campus(), &compose(raw)));
    }
}

#[test]
fn test_rewrite_replaces_previous_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    write_index(tmp.path(), &locus::build_index(Vec::new())).unwrap();
    write_index(tmp.path(), &campus()).unwrap();
    assert_eq!(read_index(tmp.path()).unwrap().len(), 6);
}

#[test]
fn test_missing_artifact_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(matches!(read_index(tmp.path()), Err(IndexFileError::Io { .. })));
}

#[test]
fn test_foreign_file_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(index_path(tmp.path()), b"{\"places\": []} plus some padding").unwrap();
    assert!(matches!(read_index(tmp.path()), Err(IndexFileError::BadMagic)));
}

#[test]
fn test_truncated_artifact_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_index(tmp.path(), &campus()).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
    assert!(matches!(read_index(tmp.path()), Err(IndexFileError::Truncated { .. })));
}

#[test]
fn test_corrupted_artifact_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_index(tmp.path(), &campus()).unwrap();
    let mut bytes = fs::read(&path).unwrap();
    bytes[HEADER_SIZE + 10] ^= 0xFF;
    fs::write(&path, &bytes).unwrap();
    assert!(matches!(
        read_index(tmp.path()),
        Err(IndexFileError::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_inspect() {
    let tmp = tempfile::tempdir().unwrap();
    write_index(tmp.path(), &campus()).unwrap();
    let info = inspect_index(tmp.path()).unwrap();
    assert_eq!(info.header.place_count, 6);
    assert_eq!(info.file_len, fs::read(index_path(tmp.path())).unwrap().len());
    assert!(info.name_terms > info.building_terms);
}
