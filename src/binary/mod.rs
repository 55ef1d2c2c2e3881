// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persisted index artifact.
//!
//! The index is written next to the service so a restart can serve queries
//! without reaching the dataset provider. The file is small and rewritten
//! whole on every build; the framing exists to make a half-written or
//! bit-flipped file fail loudly instead of loading as a subtly wrong index.
//!
//! # File Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Header (16 bytes)            │  magic, version, place count, payload length
//! ├──────────────────────────────┤
//! │ Payload (JSON)               │  the PlaceIndex: places + field vocabularies/postings
//! ├──────────────────────────────┤
//! │ Footer (8 bytes)             │  CRC32(header + payload), "XCOL"
//! └──────────────────────────────┘
//! ```

pub mod header;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IndexFileError;
use crate::index::PlaceIndex;
pub use header::{IndexFooter, IndexHeader, FOOTER_SIZE, HEADER_SIZE, MAX_FILE_SIZE, VERSION};

/// File name of the artifact inside the index directory.
pub const INDEX_FILE_NAME: &str = "places.locx";

/// Summary of an artifact, for `inspect`.
#[derive(Debug, Clone)]
pub struct ArtifactInfo {
    pub path: PathBuf,
    pub header: IndexHeader,
    pub crc32: u32,
    pub file_len: usize,
    pub name_terms: usize,
    pub he_name_terms: usize,
    pub building_terms: usize,
}

/// Path of the artifact inside `dir`.
pub fn index_path(dir: &Path) -> PathBuf {
    dir.join(INDEX_FILE_NAME)
}

/// Encode an index into artifact bytes.
pub fn encode_index(index: &PlaceIndex) -> Result<Vec<u8>, IndexFileError> {
    let payload = serde_json::to_vec(index)?;
    if HEADER_SIZE + payload.len() + FOOTER_SIZE > MAX_FILE_SIZE {
        return Err(IndexFileError::TooLarge(payload.len()));
    }

    let header = IndexHeader::new(index.len() as u32, payload.len() as u32);
    let mut bytes = Vec::with_capacity(header.file_len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(&payload);
    let footer = IndexFooter::for_data(&bytes);
    bytes.extend_from_slice(&footer.to_bytes());
    Ok(bytes)
}

/// Decode and validate artifact bytes.
pub fn decode_index(bytes: &[u8]) -> Result<PlaceIndex, IndexFileError> {
    let (header, _) = check_frame(bytes)?;
    let payload = &bytes[HEADER_SIZE..HEADER_SIZE + header.payload_len as usize];
    let index: PlaceIndex = serde_json::from_slice(payload)?;

    if index.len() != header.place_count as usize {
        return Err(IndexFileError::Truncated {
            expected: header.place_count as usize,
            found: index.len(),
        });
    }
    index.validate().map_err(|reason| {
        IndexFileError::Payload(serde::de::Error::custom(reason))
    })?;
    Ok(index)
}

/// Validate header, length and checksum without parsing the payload.
fn check_frame(bytes: &[u8]) -> Result<(IndexHeader, IndexFooter), IndexFileError> {
    if bytes.len() > MAX_FILE_SIZE {
        return Err(IndexFileError::TooLarge(bytes.len()));
    }
    let header = IndexHeader::from_bytes(bytes)?;
    let expected = header.file_len();
    if bytes.len() != expected {
        return Err(IndexFileError::Truncated {
            expected,
            found: bytes.len(),
        });
    }
    let body_len = expected - FOOTER_SIZE;
    let footer = IndexFooter::from_bytes(&bytes[body_len..])?;
    footer.verify(&bytes[..body_len])?;
    Ok((header, footer))
}

/// Write the artifact into `dir`, creating the directory if needed.
///
/// Bytes go to a temporary sibling first and are renamed over the old file,
/// so readers see either the previous artifact or the new one.
pub fn write_index(dir: &Path, index: &PlaceIndex) -> Result<PathBuf, IndexFileError> {
    fs::create_dir_all(dir).map_err(|source| IndexFileError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let bytes = encode_index(index)?;
    let path = index_path(dir);
    let tmp = dir.join(format!("{}.tmp", INDEX_FILE_NAME));

    fs::write(&tmp, &bytes).map_err(|source| IndexFileError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, &path).map_err(|source| IndexFileError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        places = index.len(),
        bytes = bytes.len(),
        "index artifact written"
    );
    Ok(path)
}

fn read_bytes(dir: &Path) -> Result<(PathBuf, Vec<u8>), IndexFileError> {
    let path = index_path(dir);
    let bytes = fs::read(&path).map_err(|source| IndexFileError::Io {
        path: path.clone(),
        source,
    })?;
    Ok((path, bytes))
}

/// Read and validate the artifact in `dir`.
pub fn read_index(dir: &Path) -> Result<PlaceIndex, IndexFileError> {
    let (_, bytes) = read_bytes(dir)?;
    decode_index(&bytes)
}

/// Header, checksum and vocabulary sizes of the artifact in `dir`.
pub fn inspect_index(dir: &Path) -> Result<ArtifactInfo, IndexFileError> {
    let (path, bytes) = read_bytes(dir)?;
    let (header, footer) = check_frame(&bytes)?;
    let index = decode_index(&bytes)?;
    Ok(ArtifactInfo {
        path,
        header,
        crc32: footer.crc32,
        file_len: bytes.len(),
        name_terms: index.name.term_count(),
        he_name_terms: index.he_name.term_count(),
        building_terms: index.building.term_count(),
    })
}
