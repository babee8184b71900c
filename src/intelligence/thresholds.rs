// ABOUTME: Limit-text parser converting human-authored limit cells into threshold rules
// ABOUTME: Handles exact bans, inequality-prefixed bounds, numeric ranges, and junk text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

//! Threshold rules parsed from reference-table limit cells.
//!
//! Cells are free text authored by nutritionists, so parsing is total:
//! every input yields exactly one rule, and malformed numeric fragments
//! degrade to 0 rather than erroring.

/// Extract a numeric value from free text, keeping only digits and decimal
/// points. Text with no usable number (or with an ambiguous one, e.g. two
/// decimal points) yields 0.
#[must_use]
pub fn extract_numeric(text: &str) -> f64 {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(0.0)
}

/// Whether the cell is a bare zero-with-unit pattern ("0", "0g", "0 mg").
/// Anchored at both ends: "0.5g" is a real quantity, not a ban.
fn is_zero_with_unit(text: &str) -> bool {
    text.strip_prefix('0').is_some_and(|rest| {
        rest.trim_start()
            .chars()
            .all(|c| matches!(c, 'g' | 'G' | 'm' | 'M'))
    })
}

/// Structured representation of one limit cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdRule {
    /// Any measured amount above zero is unsafe
    Forbidden,
    /// Measured value must not exceed the limit
    UpperBound(f64),
    /// Measured value must be at least the limit
    LowerBound(f64),
    /// Hyphen-separated interval. Only the upper bound is enforced; the
    /// lower bound is carried but never checked.
    Range {
        /// Parsed lower fragment (unenforced)
        low: f64,
        /// Parsed upper fragment, enforced as a ceiling
        high: f64,
    },
    /// Inert rule: no bound enforced. Produced by empty cells and by plain
    /// numeric text without a comparator prefix.
    Unbounded,
}

impl ThresholdRule {
    /// Parse one raw limit cell.
    ///
    /// Magnitude extraction and comparator-direction selection are separate
    /// passes: the magnitude comes from the numeric fragments, while the
    /// direction is decided by re-inspecting the original text's prefix.
    #[must_use]
    #[allow(clippy::float_cmp)] // extract_numeric yields exactly 0.0 for unparseable input
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self::Unbounded;
        }
        if text.to_lowercase().contains("avoid") || text == "0" || is_zero_with_unit(text) {
            return Self::Forbidden;
        }

        // Magnitude pass: hyphenated interval (first two fragments only),
        // otherwise a single fragment.
        let (low, high, is_range) = if text.contains('-') {
            let mut fragments = text.split('-');
            let low = extract_numeric(fragments.next().unwrap_or(""));
            let high = fragments.next().map_or(low, extract_numeric);
            (low, high, true)
        } else {
            let value = extract_numeric(text);
            (value, value, false)
        };

        // Direction pass over the original text. A magnitude of exactly zero
        // is a ceiling and takes precedence over a "≥" prefix.
        if text.starts_with('≤') || high == 0.0 {
            Self::UpperBound(high)
        } else if text.starts_with('≥') {
            Self::LowerBound(high)
        } else if is_range {
            Self::Range { low, high }
        } else {
            Self::Unbounded
        }
    }

    /// The enforced ceiling, if this rule has one
    #[must_use]
    pub const fn ceiling(&self) -> Option<f64> {
        match self {
            Self::Forbidden => Some(0.0),
            Self::UpperBound(limit) | Self::Range { high: limit, .. } => Some(*limit),
            Self::LowerBound(_) | Self::Unbounded => None,
        }
    }

    /// The enforced floor, if this rule has one
    #[must_use]
    pub const fn floor(&self) -> Option<f64> {
        match self {
            Self::LowerBound(limit) => Some(*limit),
            _ => None,
        }
    }

    /// Whether this rule enforces no bound at all
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}
