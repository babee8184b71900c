// ABOUTME: Tests for reference-table loading and nutrient limit index lookups
// ABOUTME: Covers key normalization, BOM tolerance, blank cells, and load degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write as _;
use std::path::Path;

use nutrisafe::config::{DatasetConfig, DEFAULT_DATASET_PATH};
use nutrisafe::dataset::NutrientLimitIndex;
use nutrisafe::models::AgeGroup;

const TABLE: &str = "\
Nutrient/chemicals to avoid,0-6 years,7-12 years,13-18 years,Adults
Added Sugar,0g,≤15,≤20,≤25
Fiber,≥10,≥15,≥20,≥25
Preservatives,avoid,,,≤0.5
";

#[test]
fn lookup_returns_the_raw_cell_for_the_bracket() {
    let index = NutrientLimitIndex::from_csv_str(TABLE).unwrap();
    assert_eq!(index.lookup("added sugar", AgeGroup::Child), Some("0g"));
    assert_eq!(index.lookup("added sugar", AgeGroup::Teen), Some("≤20"));
    assert_eq!(index.lookup("fiber", AgeGroup::Adult), Some("≥25"));
}

#[test]
fn lookup_normalizes_underscores_and_case() {
    let index = NutrientLimitIndex::from_csv_str(TABLE).unwrap();
    assert_eq!(index.lookup("Added_Sugar", AgeGroup::Adult), Some("≤25"));
    assert_eq!(index.lookup("ADDED_SUGAR", AgeGroup::Adult), Some("≤25"));
}

#[test]
fn unknown_nutrients_miss() {
    let index = NutrientLimitIndex::from_csv_str(TABLE).unwrap();
    assert_eq!(index.lookup("unobtainium", AgeGroup::Adult), None);
}

#[test]
fn blank_cells_come_back_as_empty_text() {
    let index = NutrientLimitIndex::from_csv_str(TABLE).unwrap();
    assert_eq!(index.lookup("preservatives", AgeGroup::PreTeen), Some(""));
}

#[test]
fn utf8_sig_exports_are_tolerated() {
    let with_bom = format!("\u{feff}{TABLE}");
    let index = NutrientLimitIndex::from_csv_str(&with_bom).unwrap();
    assert_eq!(index.lookup("added sugar", AgeGroup::Child), Some("0g"));
}

#[test]
fn loads_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TABLE.as_bytes()).unwrap();
    let index = NutrientLimitIndex::from_csv_path(file.path()).unwrap();
    assert_eq!(index.len(), 3);
}

#[test]
fn missing_file_degrades_to_an_empty_index() {
    let index = NutrientLimitIndex::load_or_empty(Path::new("no/such/dataset.csv"));
    assert!(index.is_empty());
    assert_eq!(index.lookup("added sugar", AgeGroup::Child), None);
}

#[test]
fn bundled_dataset_loads_with_the_default_config() {
    let config = DatasetConfig::default();
    assert_eq!(config.path, Path::new(DEFAULT_DATASET_PATH));
    let index = NutrientLimitIndex::from_csv_path(&config.path).unwrap();
    assert!(!index.is_empty());
    assert_eq!(index.lookup("trans_fat", AgeGroup::Adult), Some("avoid"));
}
