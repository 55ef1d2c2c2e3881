// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Artifact header and footer.
//!
//! The header is 16 bytes of fixed-size fields, parsed before anything else.
//! It says how many places the file holds and how long the payload is, so a
//! truncated file is caught before the JSON parser ever sees it.
//!
//! The footer is 8 bytes: a CRC32 checksum over everything before it, plus a
//! magic number ("XCOL", the header magic reversed). If the footer is wrong,
//! something got corrupted or truncated. Don't trust the data.

use crc32fast::Hasher as Crc32Hasher;

use crate::error::IndexFileError;

/// Magic bytes: "LOCX" in ASCII (header)
pub const MAGIC: [u8; 4] = [0x4C, 0x4F, 0x43, 0x58];

/// Footer magic: "XCOL" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = [0x58, 0x43, 0x4F, 0x4C];

/// Current format version
pub const VERSION: u8 = 1;

pub const HEADER_SIZE: usize = 16;
pub const FOOTER_SIZE: usize = 8;

/// Maximum file size: 64 MB (a campus dataset is a few hundred KB)
pub const MAX_FILE_SIZE: usize = 64 * 1024 * 1024;

/// Artifact header (16 bytes fixed size)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHeader {
    pub version: u8,
    pub place_count: u32,
    pub payload_len: u32,
}

impl IndexHeader {
    pub fn new(place_count: u32, payload_len: u32) -> Self {
        Self {
            version: VERSION,
            place_count,
            payload_len,
        }
    }

    /// Layout: magic[4] version[1] reserved[3] place_count[4 LE] payload_len[4 LE]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&MAGIC);
        buf[4] = self.version;
        buf[8..12].copy_from_slice(&self.place_count.to_le_bytes());
        buf[12..16].copy_from_slice(&self.payload_len.to_le_bytes());
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IndexFileError> {
        if bytes.len() < HEADER_SIZE {
            return Err(IndexFileError::Truncated {
                expected: HEADER_SIZE,
                found: bytes.len(),
            });
        }
        if bytes[0..4] != MAGIC {
            return Err(IndexFileError::BadMagic);
        }
        let version = bytes[4];
        if version != VERSION {
            return Err(IndexFileError::UnsupportedVersion(version));
        }
        Ok(Self {
            version,
            place_count: read_u32(&bytes[8..12]),
            payload_len: read_u32(&bytes[12..16]),
        })
    }

    /// Total file size implied by this header.
    pub fn file_len(&self) -> usize {
        HEADER_SIZE + self.payload_len as usize + FOOTER_SIZE
    }
}

/// Artifact footer (8 bytes): CRC32 over header + payload, then magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFooter {
    pub crc32: u32,
}

impl IndexFooter {
    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }

    pub fn for_data(data: &[u8]) -> Self {
        Self {
            crc32: Self::compute_crc32(data),
        }
    }

    pub fn to_bytes(self) -> [u8; FOOTER_SIZE] {
        let mut buf = [0u8; FOOTER_SIZE];
        buf[0..4].copy_from_slice(&self.crc32.to_le_bytes());
        buf[4..8].copy_from_slice(&FOOTER_MAGIC);
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IndexFileError> {
        if bytes.len() < FOOTER_SIZE {
            return Err(IndexFileError::Truncated {
                expected: FOOTER_SIZE,
                found: bytes.len(),
            });
        }
        if bytes[4..8] != FOOTER_MAGIC {
            return Err(IndexFileError::BadMagic);
        }
        Ok(Self {
            crc32: read_u32(&bytes[0..4]),
        })
    }

    /// Check the stored checksum against `data`.
    pub fn verify(self, data: &[u8]) -> Result<(), IndexFileError> {
        let computed = Self::compute_crc32(data);
        if computed == self.crc32 {
            Ok(())
        } else {
            Err(IndexFileError::ChecksumMismatch {
                stored: self.crc32,
                computed,
            })
        }
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(buf)
}
