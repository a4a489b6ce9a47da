//! Compile-time registry of reference areas.
//!
//! Each entry is an `(id, toml_content)` pair embedded via `include_str!`.
//! Adding a reference area requires creating a TOML file in `areas/` and
//! adding a corresponding entry here.

use rent_score_area_models::Area;

use crate::{AreaError, parse_area};

/// Number of registered reference areas. Enforced by a test.
#[cfg(test)]
const EXPECTED_AREA_COUNT: usize = 2;

/// Embedded TOML area definitions.
const AREA_TOMLS: &[(&str, &str)] = &[
    ("orlando", include_str!("../areas/orlando.toml")),
    ("us_cities", include_str!("../areas/us_cities.toml")),
];

/// Returns the ids of all registered areas, in registry order.
#[must_use]
pub fn area_ids() -> Vec<&'static str> {
    AREA_TOMLS.iter().map(|(id, _)| *id).collect()
}

/// Returns all registered areas paired with their ids.
///
/// # Errors
///
/// Returns an error if any embedded TOML file fails to parse or validate.
pub fn all_areas() -> Result<Vec<(&'static str, Area)>, AreaError> {
    AREA_TOMLS
        .iter()
        .map(|(id, toml_str)| parse_area(toml_str).map(|area| (*id, area)))
        .collect()
}

/// Looks up a registered area by id (case-insensitive).
///
/// # Errors
///
/// Returns an error if the matching embedded TOML fails to parse.
pub fn find_area(id: &str) -> Result<Option<Area>, AreaError> {
    AREA_TOMLS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(id))
        .map(|(_, toml_str)| parse_area(toml_str))
        .transpose()
}
