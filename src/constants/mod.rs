// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups immutable lookup tables by domain instead of one large file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! Constants module
//!
//! Application constants organized by domain. All tables are immutable and
//! constructed at compile time; nothing here is mutated at runtime.

pub mod keywords;

pub use keywords::*;
