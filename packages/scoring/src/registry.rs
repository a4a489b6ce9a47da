//! Compile-time registry of scoring profiles.
//!
//! Each entry is an `(id, toml_content)` pair embedded via `include_str!`.
//! Profiles are validated when requested, never at startup, so callers
//! decide when initialization happens and can inject their own profile
//! instead.

use crate::{ScoreError, ScoringProfile};

/// Id of the profile used when none is specified.
pub const DEFAULT_PROFILE_ID: &str = "default";

/// Number of registered profiles. Enforced by a test.
#[cfg(test)]
const EXPECTED_PROFILE_COUNT: usize = 1;

pub(crate) const DEFAULT_PROFILE_TOML: &str = include_str!("../profiles/default.toml");

/// Embedded TOML profile definitions.
const PROFILE_TOMLS: &[(&str, &str)] = &[(DEFAULT_PROFILE_ID, DEFAULT_PROFILE_TOML)];

/// Returns all registered profiles.
///
/// # Errors
///
/// Returns an error if any embedded profile fails to parse or validate.
pub fn all_profiles() -> Result<Vec<ScoringProfile>, ScoreError> {
    PROFILE_TOMLS
        .iter()
        .map(|(_, toml_str)| ScoringProfile::from_toml(toml_str))
        .collect()
}

/// Looks up a registered profile by id (case-insensitive).
///
/// # Errors
///
/// Returns an error if the matching embedded profile fails to validate.
pub fn find_profile(id: &str) -> Result<Option<ScoringProfile>, ScoreError> {
    PROFILE_TOMLS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(id))
        .map(|(_, toml_str)| ScoringProfile::from_toml(toml_str))
        .transpose()
}

/// Returns the validated default profile.
///
/// # Errors
///
/// Returns an error if the embedded default profile fails to validate.
pub fn default_profile() -> Result<ScoringProfile, ScoreError> {
    ScoringProfile::from_toml(DEFAULT_PROFILE_TOML)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rent_score_area_models::Metric;

    use super::*;

    #[test]
    fn loads_all_profiles() {
        let profiles = all_profiles().unwrap();
        assert_eq!(
            profiles.len(),
            EXPECTED_PROFILE_COUNT,
            "Expected {EXPECTED_PROFILE_COUNT} profiles, found {}. \
             Update EXPECTED_PROFILE_COUNT after adding/removing profiles.",
            profiles.len()
        );
    }

    #[test]
    fn registry_ids_match_profile_ids() {
        let mut seen = BTreeSet::new();
        for (id, _) in PROFILE_TOMLS {
            let profile = find_profile(id).unwrap().unwrap();
            assert_eq!(profile.id(), *id);
            assert!(seen.insert(*id), "Duplicate profile ID: {id}");
        }
        assert!(find_profile("nope").unwrap().is_none());
    }

    #[test]
    fn find_is_case_insensitive() {
        let profile = find_profile("DEFAULT").unwrap().unwrap();
        assert_eq!(profile.id(), DEFAULT_PROFILE_ID);
    }

    #[test]
    fn default_profile_weights_every_required_metric() {
        let profile = default_profile().unwrap();
        let weighted: BTreeSet<Metric> = profile
            .weighted_metrics()
            .iter()
            .map(crate::WeightedMetric::metric)
            .collect();
        let required: BTreeSet<Metric> = Metric::ALL
            .iter()
            .copied()
            .filter(|m| m.is_required())
            .collect();
        assert_eq!(weighted, required);
        assert!((profile.total_weight() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn default_profile_keeps_reference_ranges() {
        let profile = default_profile().unwrap();
        let rent = profile.normalization()[&Metric::MedianRent];
        assert!((rent.min() - 1000.0).abs() < f64::EPSILON);
        assert!((rent.max() - 4000.0).abs() < f64::EPSILON);
        assert!(rent.lower_is_better());

        let new_units = profile.normalization()[&Metric::PctNewRenterStructures];
        assert!((new_units.max() - 100_000.0).abs() < f64::EPSILON);
        assert!(!new_units.lower_is_better());
    }
}
