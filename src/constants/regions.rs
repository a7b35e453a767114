// ABOUTME: Supported countries and their food-sourcing region mapping
// ABOUTME: Unknown countries fall back to the Global region
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Country and region tables
//!
//! The profile carries a country as free text constrained to a fixed
//! allowed set; the food library is keyed by coarser sourcing regions.

use crate::models::Region;

/// Countries accepted during onboarding
pub const ALLOWED_COUNTRIES: &[&str] = &[
    "Bangladesh",
    "India",
    "Pakistan",
    "USA",
    "Canada",
    "UAE",
    "China",
    "Sri Lanka",
    "UK",
    "Australia",
    "Germany",
    "Japan",
    "Saudi Arabia",
    "Singapore",
    "France",
    "Italy",
    "Brazil",
];

/// Whether the country is in the allowed onboarding set
#[must_use]
pub fn is_allowed_country(country: &str) -> bool {
    ALLOWED_COUNTRIES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(country))
}

/// Food-sourcing region for a country; unknown countries map to Global
#[must_use]
pub fn region_for_country(country: &str) -> Region {
    match country {
        "Bangladesh" | "India" | "Pakistan" | "Sri Lanka" => Region::SouthAsia,
        "USA" | "Canada" | "UK" | "Australia" | "Germany" | "France" | "Italy" | "Brazil" => {
            Region::Western
        }
        "UAE" | "Saudi Arabia" => Region::MiddleEast,
        "China" | "Japan" | "Singapore" => Region::EastAsia,
        _ => Region::Global,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_allowed_country_has_a_specific_region() {
        for country in ALLOWED_COUNTRIES {
            assert_ne!(
                region_for_country(country),
                Region::Global,
                "{country} should map to a specific region"
            );
        }
    }

    #[test]
    fn test_unknown_country_falls_back_to_global() {
        assert_eq!(region_for_country("Atlantis"), Region::Global);
        assert_eq!(region_for_country(""), Region::Global);
    }

    #[test]
    fn test_allowed_country_check_is_case_insensitive() {
        assert!(is_allowed_country("Bangladesh"));
        assert!(is_allowed_country("bangladesh"));
        assert!(!is_allowed_country("Mars"));
    }
}
