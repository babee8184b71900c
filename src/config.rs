// ABOUTME: Environment configuration for the reference dataset location
// ABOUTME: Environment-only approach; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

//! Environment-based configuration.

use std::env;
use std::path::PathBuf;
use tracing::info;

/// Environment variable overriding the reference dataset path
pub const ENV_DATASET_PATH: &str = "NUTRISAFE_DATASET_PATH";

/// Default reference dataset path, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "data/nutrients-dataset.csv";

/// Configuration for locating the nutrient reference table
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Path of the reference CSV
    pub path: PathBuf,
}

impl DatasetConfig {
    /// Load configuration from the environment, falling back to the bundled
    /// dataset path when `NUTRISAFE_DATASET_PATH` is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let path = env::var(ENV_DATASET_PATH)
            .map_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH), PathBuf::from);
        info!(path = %path.display(), "dataset path configured");
        Self { path }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}
