// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! Each clause a place satisfies adds to its score, so a place that matches
//! the query three ways outranks one that matches it once. Within a clause,
//! exact beats prefix and fewer edits beat more.

mod core;
pub mod ranking;

pub use core::*;
