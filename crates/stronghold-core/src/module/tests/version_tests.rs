use std::str::FromStr;

use crate::module::version::{ApiVersion, VersionRange};

#[test]
fn api_version_parses_three_part_strings() {
    let version = ApiVersion::from_str("1.2.3").unwrap();
    assert_eq!(version, ApiVersion::new(1, 2, 3));
    assert_eq!(version.to_string(), "1.2.3");
}

#[test]
fn api_version_rejects_malformed_strings() {
    assert!(ApiVersion::from_str("1.2").is_err());
    assert!(ApiVersion::from_str("1.2.3.4").is_err());
    assert!(ApiVersion::from_str("a.b.c").is_err());
}

#[test]
fn version_range_matches_semver_constraints() {
    let range = VersionRange::from_constraint("^0.1").unwrap();
    assert!(range.includes(&ApiVersion::new(0, 1, 0).to_semver()));
    assert!(range.includes(&ApiVersion::new(0, 1, 9).to_semver()));
    assert!(!range.includes(&ApiVersion::new(0, 2, 0).to_semver()));
}

#[test]
fn version_range_rejects_invalid_constraints() {
    assert!(VersionRange::from_constraint("not-a-range").is_err());
}

#[test]
fn version_range_displays_original_constraint() {
    let range = VersionRange::from_constraint(">=1.0, <2.0").unwrap();
    assert_eq!(range.constraint_string(), ">=1.0, <2.0");
    assert_eq!(range.to_string(), ">=1.0, <2.0");
}
