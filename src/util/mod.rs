// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by indexing and querying.
//!
//! Index time and query time must agree on what a token is, otherwise a
//! perfectly good prefix never lines up with the vocabulary. Everything that
//! turns raw text into tokens lives here so there is exactly one definition.

pub mod normalize;

pub use normalize::{normalize, tokenize};
