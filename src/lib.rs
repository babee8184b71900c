// ABOUTME: Main library entry point for the NutriSafe evaluation engine
// ABOUTME: Evaluates product nutrient composition against age-bracketed limit rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

#![deny(unsafe_code)]

//! # NutriSafe
//!
//! A nutrient safety evaluation engine. Given a product's measured nutrient
//! composition and a consumer's health profile, NutriSafe decides whether the
//! product is safe for that consumer based on age-bracketed limit rules
//! sourced from a reference table.
//!
//! ## Architecture
//!
//! The engine follows a modular architecture:
//! - **dataset**: Reference-table loading and the build-once nutrient limit index
//! - **intelligence**: Limit-text parsing and the safety evaluator
//! - **config**: Environment-based configuration of the dataset location
//! - **models** (re-exported from `nutrisafe-core`): consumer and verdict types
//!
//! The evaluator is the sole interface the surrounding application consumes;
//! it never returns an error, degrading to conservative defaults instead.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrisafe::config::DatasetConfig;
//! use nutrisafe::dataset::NutrientLimitIndex;
//! use nutrisafe::intelligence::SafetyEvaluator;
//! use nutrisafe::models::{HealthProfile, NutritionData};
//!
//! let config = DatasetConfig::from_env();
//! let index = NutrientLimitIndex::load_or_empty(&config.path);
//! let evaluator = SafetyEvaluator::new(index);
//!
//! let mut product = NutritionData::new();
//! product.insert("added_sugar".to_owned(), 12.0);
//!
//! let verdict = evaluator.evaluate(&product, Some(&HealthProfile { age: 9 }));
//! println!("{}", verdict.conclusion);
//! ```

/// Environment-based configuration for the reference dataset
pub mod config;

/// Reference-table loading and the nutrient limit index
pub mod dataset;

/// Error types for dataset ingestion
pub mod errors;

/// Limit-text parsing and safety evaluation
pub mod intelligence;

pub use nutrisafe_core::constants;
pub use nutrisafe_core::models;
