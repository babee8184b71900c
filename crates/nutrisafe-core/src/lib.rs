// ABOUTME: Core types and constants for the NutriSafe evaluation platform
// ABOUTME: Foundation crate with models, message literals, and column headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

#![deny(unsafe_code)]

//! # NutriSafe Core
//!
//! Foundation crate providing shared types and constants for the NutriSafe
//! evaluation engine. This crate is designed to change infrequently and
//! performs no I/O.
//!
//! ## Modules
//!
//! - **models**: Consumer and verdict data models (`AgeGroup`, `HealthProfile`,
//!   `NutritionData`, `EvaluationResult`)
//! - **constants**: Message literals and reference-table column headers

/// Consumer and verdict data models
pub mod models;

/// Message literals and reference-table column headers organized by domain
pub mod constants;
