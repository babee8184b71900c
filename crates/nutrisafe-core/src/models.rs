// ABOUTME: Consumer and verdict data models for nutrient safety evaluation
// ABOUTME: AgeGroup, HealthProfile, NutritionData, and EvaluationResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::dataset;

/// Age bracket used to select the applicable limit column in the reference table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Ages 0 through 6 inclusive
    Child,
    /// Ages 7 through 12 inclusive
    PreTeen,
    /// Ages 13 through 18 inclusive
    Teen,
    /// Any other age
    Adult,
}

impl AgeGroup {
    /// Resolve the age bracket for a consumer age.
    ///
    /// Ranges are inclusive and checked in order; any age above 18 is adult.
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=6 => Self::Child,
            7..=12 => Self::PreTeen,
            13..=18 => Self::Teen,
            _ => Self::Adult,
        }
    }

    /// Header of this bracket's limit column in the reference table
    #[must_use]
    pub const fn column_label(self) -> &'static str {
        match self {
            Self::Child => dataset::CHILD_COLUMN,
            Self::PreTeen => dataset::PRE_TEEN_COLUMN,
            Self::Teen => dataset::TEEN_COLUMN,
            Self::Adult => dataset::ADULT_COLUMN,
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_label())
    }
}

/// Consumer attributes needed for a personalized evaluation.
///
/// Absence of a profile (an unauthenticated consumer, or one who has not
/// completed onboarding) is modeled as `Option<&HealthProfile>` = `None` at
/// the evaluator boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Consumer age in whole years
    pub age: u32,
}

/// Measured nutrient composition of one product, in grams per nutrient key.
///
/// Keys use the client convention of underscores for spaces (`added_sugar`);
/// insertion order is preserved so warnings come out in input order.
pub type NutritionData = IndexMap<String, f64>;

/// Verdict produced by one evaluation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall conclusion text
    pub conclusion: String,
    /// One entry per nutrient that failed its threshold check, in input order
    pub warnings: Vec<String>,
    /// Reserved for future population; always empty in current behavior
    pub safe_nutrients: Vec<String>,
}

impl EvaluationResult {
    /// Build a verdict from an accumulated warning list, selecting the
    /// conclusion literal based on whether any warning was generated.
    #[must_use]
    pub fn from_warnings(warnings: Vec<String>) -> Self {
        let conclusion = if warnings.is_empty() {
            crate::constants::messages::ALL_WITHIN_LIMITS
        } else {
            crate::constants::messages::LIMITS_EXCEEDED
        };
        Self {
            conclusion: conclusion.to_owned(),
            warnings,
            safe_nutrients: Vec::new(),
        }
    }

    /// Verdict for a consumer with no health profile
    #[must_use]
    pub fn login_prompt() -> Self {
        Self {
            conclusion: crate::constants::messages::LOGIN_PROMPT.to_owned(),
            warnings: Vec::new(),
            safe_nutrients: Vec::new(),
        }
    }
}
