// ABOUTME: Intelligence layer for nutrient safety decisions
// ABOUTME: Limit-text parsing and threshold evaluation against consumer profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

//! Limit-text parsing and safety evaluation.

/// Safety evaluator orchestrating index lookups and rule application
pub mod safety;

/// Limit-text parsing into structured threshold rules
pub mod thresholds;

pub use safety::SafetyEvaluator;
pub use thresholds::{extract_numeric, ThresholdRule};
