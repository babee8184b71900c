// ABOUTME: Error types for reference-table ingestion
// ABOUTME: DatasetError covers I/O and CSV parse failures during the one-time load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

//! Dataset ingestion errors.
//!
//! These errors stay inside the loading layer: the evaluator boundary never
//! propagates them. A failed load degrades to an empty index via
//! [`crate::dataset::NutrientLimitIndex::load_or_empty`].

use thiserror::Error;

/// Errors raised while loading the nutrient reference table
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The table file could not be read
    #[error("failed to read nutrients dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A table row could not be parsed
    #[error("failed to parse nutrients dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
