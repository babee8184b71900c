// ABOUTME: Tests for age bracket resolution and reference-table column labels
// ABOUTME: Covers inclusive bracket boundaries and the adult fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriSafe Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrisafe::models::AgeGroup;

#[test]
fn ages_zero_through_six_resolve_to_child() {
    for age in 0..=6 {
        assert_eq!(AgeGroup::from_age(age), AgeGroup::Child, "age {age}");
    }
}

#[test]
fn ages_seven_through_twelve_resolve_to_pre_teen() {
    for age in 7..=12 {
        assert_eq!(AgeGroup::from_age(age), AgeGroup::PreTeen, "age {age}");
    }
}

#[test]
fn ages_thirteen_through_eighteen_resolve_to_teen() {
    for age in 13..=18 {
        assert_eq!(AgeGroup::from_age(age), AgeGroup::Teen, "age {age}");
    }
}

#[test]
fn other_ages_resolve_to_adult() {
    for age in [19, 30, 65, 120] {
        assert_eq!(AgeGroup::from_age(age), AgeGroup::Adult, "age {age}");
    }
}

#[test]
fn bracket_boundaries_are_inclusive() {
    assert_eq!(AgeGroup::from_age(6), AgeGroup::Child);
    assert_eq!(AgeGroup::from_age(7), AgeGroup::PreTeen);
    assert_eq!(AgeGroup::from_age(12), AgeGroup::PreTeen);
    assert_eq!(AgeGroup::from_age(13), AgeGroup::Teen);
    assert_eq!(AgeGroup::from_age(18), AgeGroup::Teen);
    assert_eq!(AgeGroup::from_age(19), AgeGroup::Adult);
}

#[test]
fn column_labels_match_reference_table_headers() {
    assert_eq!(AgeGroup::Child.column_label(), "0-6 years");
    assert_eq!(AgeGroup::PreTeen.column_label(), "7-12 years");
    assert_eq!(AgeGroup::Teen.column_label(), "13-18 years");
    assert_eq!(AgeGroup::Adult.column_label(), "Adults");
}

#[test]
fn display_uses_the_column_label() {
    assert_eq!(AgeGroup::from_age(30).to_string(), "Adults");
}
