// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Message literals and reference-table headers for the NutriSafe platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

//! Constants module
//!
//! Application constants grouped by domain. Conclusion literals are consumed
//! verbatim by downstream clients, so their exact bytes are load-bearing.

/// Conclusion and warning message literals
pub mod messages {
    /// Conclusion returned when no health profile is available
    pub const LOGIN_PROMPT: &str =
        "Log in and update your health profile for personalized recommendations.";

    /// Conclusion returned when every checked nutrient passes
    pub const ALL_WITHIN_LIMITS: &str = "All nutrients are within safe limits.";

    /// Conclusion returned when at least one warning was generated.
    /// The leading space is kept for byte compatibility with existing clients.
    pub const LIMITS_EXCEEDED: &str = " Some nutrients exceed recommended limits.";
}

/// Reference-table column headers
pub mod dataset {
    /// Header of the nutrient-name column in the reference table
    pub const NUTRIENT_COLUMN: &str = "Nutrient/chemicals to avoid";

    /// Header of the 0-6 years limit column
    pub const CHILD_COLUMN: &str = "0-6 years";

    /// Header of the 7-12 years limit column
    pub const PRE_TEEN_COLUMN: &str = "7-12 years";

    /// Header of the 13-18 years limit column
    pub const TEEN_COLUMN: &str = "13-18 years";

    /// Header of the adult limit column
    pub const ADULT_COLUMN: &str = "Adults";
}
