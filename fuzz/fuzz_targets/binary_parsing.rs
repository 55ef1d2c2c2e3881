// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Artifact parsing under adversarial input.
//!
//! A damaged `places.locx` must produce an error, never a panic and never an
//! index that breaks the searcher later.

#![no_main]

use libfuzzer_sys::fuzz_target;
use locus::binary::decode_index;
use locus::{compose, search};

fuzz_target!(|data: &[u8]| {
    if let Ok(index) = decode_index(data) {
        // Anything that decodes has passed validation, so searching it is safe
        assert!(index.validate().is_ok());
        let _ = search(&index, &compose("a"));
    }
});
