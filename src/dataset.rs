// ABOUTME: Reference-table loading and the build-once nutrient limit index
// ABOUTME: CSV rows keyed by lowercased nutrient name, one raw limit cell per age bracket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

//! Nutrient limit index built from the reference table.
//!
//! The table is loaded once at process start and is read-only thereafter.
//! Limit cells stay as raw text here; parsing is deferred to evaluation time
//! (see [`crate::intelligence::thresholds`]).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::errors::DatasetResult;
use nutrisafe_core::models::AgeGroup;

/// One row of the reference table: a nutrient name and a raw limit string
/// per age bracket. Cells are free text authored by nutritionists
/// ("avoid", "0g", "≤25", "2-5", ...).
#[derive(Debug, Clone, Deserialize)]
pub struct NutrientLimitRecord {
    /// Human-authored nutrient name
    #[serde(rename = "Nutrient/chemicals to avoid")]
    pub nutrient: String,

    /// Raw limit text for ages 0-6
    #[serde(rename = "0-6 years", default)]
    pub child: String,

    /// Raw limit text for ages 7-12
    #[serde(rename = "7-12 years", default)]
    pub pre_teen: String,

    /// Raw limit text for ages 13-18
    #[serde(rename = "13-18 years", default)]
    pub teen: String,

    /// Raw limit text for adults
    #[serde(rename = "Adults", default)]
    pub adult: String,
}

impl NutrientLimitRecord {
    /// Raw limit cell for the given age bracket
    #[must_use]
    pub fn limit_for(&self, group: AgeGroup) -> &str {
        match group {
            AgeGroup::Child => &self.child,
            AgeGroup::PreTeen => &self.pre_teen,
            AgeGroup::Teen => &self.teen,
            AgeGroup::Adult => &self.adult,
        }
    }
}

/// Build-once lookup from normalized nutrient name to per-bracket limit text.
///
/// Immutable after construction; safe to share across concurrent evaluations
/// without locking.
#[derive(Debug, Clone, Default)]
pub struct NutrientLimitIndex {
    records: HashMap<String, NutrientLimitRecord>,
}

impl NutrientLimitIndex {
    /// An index with no records; every lookup misses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from CSV text. The first column holds nutrient names;
    /// bracket columns are matched by header. Rows are keyed by the
    /// lowercased, trimmed nutrient name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::DatasetError::Csv`] when a row fails to parse.
    pub fn from_csv_str(data: &str) -> DatasetResult<Self> {
        // Tolerate utf-8-sig exports
        let data = data.trim_start_matches('\u{feff}');
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let mut records = HashMap::new();
        for row in reader.deserialize::<NutrientLimitRecord>() {
            let record = row?;
            records.insert(record.nutrient.trim().to_lowercase(), record);
        }
        Ok(Self { records })
    }

    /// Build the index from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::DatasetError`] when the file cannot be read
    /// or a row fails to parse.
    pub fn from_csv_path(path: &Path) -> DatasetResult<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_csv_str(&data)
    }

    /// Load the index, degrading to an empty index when the table is
    /// unavailable. The evaluator stays callable either way; with an empty
    /// index every lookup misses and no warnings are produced.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_csv_path(path) {
            Ok(index) => {
                info!(
                    path = %path.display(),
                    nutrients = index.len(),
                    "Successfully loaded nutrients dataset"
                );
                index
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "Error loading nutrients dataset");
                Self::empty()
            }
        }
    }

    /// Look up the raw limit text for a nutrient key and age bracket.
    ///
    /// The caller's key has underscores replaced with spaces and is compared
    /// case-insensitively against the nutrient-name column. Unknown nutrients
    /// return `None` and are silently skipped by the evaluator; a blank cell
    /// comes back as empty text and parses to an inert rule downstream.
    #[must_use]
    pub fn lookup(&self, nutrient_key: &str, group: AgeGroup) -> Option<&str> {
        let normalized = nutrient_key.replace('_', " ").to_lowercase();
        self.records
            .get(&normalized)
            .map(|record| record.limit_for(group))
    }

    /// Number of nutrients in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
