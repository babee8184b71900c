// ABOUTME: Safety evaluator applying age-bracketed threshold rules to product composition
// ABOUTME: Accumulates per-nutrient warnings into a single verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

//! Product safety evaluation against a consumer's health profile.

use tracing::debug;

use crate::dataset::NutrientLimitIndex;
use crate::intelligence::thresholds::ThresholdRule;
use nutrisafe_core::models::{AgeGroup, EvaluationResult, HealthProfile, NutritionData};

/// Format a measured amount or limit for a warning message, without a
/// trailing `.0` on whole numbers (3.0 -> "3", 12.5 -> "12.5").
#[allow(clippy::float_cmp)] // fract() of a whole number is exactly 0.0
fn fmt_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Evaluates product nutrient composition against the reference limit index.
///
/// The index is injected at construction and never mutated, so a single
/// evaluator may serve concurrent callers behind an `Arc`. Evaluation is
/// pure: the same inputs always produce the same verdict.
#[derive(Debug, Clone)]
pub struct SafetyEvaluator {
    index: NutrientLimitIndex,
}

impl SafetyEvaluator {
    /// Create an evaluator over a loaded limit index
    #[must_use]
    pub const fn new(index: NutrientLimitIndex) -> Self {
        Self { index }
    }

    /// The limit index backing this evaluator
    #[must_use]
    pub const fn index(&self) -> &NutrientLimitIndex {
        &self.index
    }

    /// Evaluate a product's nutrient composition for one consumer.
    ///
    /// With no health profile the verdict is a login prompt and no lookups
    /// are performed. Otherwise each nutrient in input order is looked up,
    /// its limit cell parsed, and the rule applied to the measured value.
    /// Nutrients absent from the reference table are skipped. Never errors:
    /// malformed data degrades to a skipped nutrient or a zero threshold.
    #[must_use]
    pub fn evaluate(
        &self,
        nutrition_data: &NutritionData,
        health_profile: Option<&HealthProfile>,
    ) -> EvaluationResult {
        let Some(profile) = health_profile else {
            return EvaluationResult::login_prompt();
        };

        let group = AgeGroup::from_age(profile.age);
        let mut warnings = Vec::new();

        for (nutrient, &measured) in nutrition_data {
            let Some(raw_limit) = self.index.lookup(nutrient, group) else {
                continue;
            };
            let rule = ThresholdRule::parse(raw_limit);

            if let Some(limit) = rule.ceiling() {
                if measured > limit {
                    debug!(%nutrient, measured, limit, %group, "nutrient exceeds ceiling");
                    warnings.push(format!(
                        "{nutrient} exceeds limit ({}g > {}g), hence this product is not recommended for you.",
                        fmt_amount(measured),
                        fmt_amount(limit)
                    ));
                }
            } else if let Some(limit) = rule.floor() {
                if measured < limit {
                    debug!(%nutrient, measured, limit, %group, "nutrient below floor");
                    warnings.push(format!(
                        "{nutrient} is below recommended ({}g < {}g).",
                        fmt_amount(measured),
                        fmt_amount(limit)
                    ));
                }
            }
        }

        EvaluationResult::from_warnings(warnings)
    }
}
