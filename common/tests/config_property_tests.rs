// Property-based tests for settings loading and derived accessors

use common::config::{Settings, DEV_DATABASE_URL};
use proptest::prelude::*;

// ============================================================================
// Property: origin list splitting preserves order and trims whitespace
// ============================================================================

#[test]
fn property_allowed_origins_split_trimmed_in_order() {
    proptest!(|(
        origins in prop::collection::vec("https?://[a-z0-9.-]{1,20}(:[0-9]{2,5})?", 1..6),
        pad_left in prop::collection::vec(" {0,3}", 1..6),
        pad_right in prop::collection::vec(" {0,3}", 1..6),
    )| {
        let raw: Vec<String> = origins
            .iter()
            .zip(pad_left.iter().cycle())
            .zip(pad_right.iter().cycle())
            .map(|((origin, left), right)| format!("{left}{origin}{right}"))
            .collect();

        let settings = Settings {
            allowed_origins: raw.join(","),
            ..Settings::default()
        };

        prop_assert_eq!(settings.allowed_origins_list(), origins);
    });
}

// ============================================================================
// Property: environment-mode predicates are case-insensitive and exclusive
// for the two known modes
// ============================================================================

#[test]
fn property_environment_predicates_case_insensitive() {
    proptest!(|(environment in "(?i)(development|production)")| {
        let settings = Settings {
            environment: environment.clone(),
            ..Settings::default()
        };

        if environment.eq_ignore_ascii_case("development") {
            prop_assert!(settings.is_development());
            prop_assert!(!settings.is_production());
        } else {
            prop_assert!(settings.is_production());
            prop_assert!(!settings.is_development());
        }
    });
}

// ============================================================================
// Property: the database URL fallback only applies when unset
// ============================================================================

#[test]
fn property_database_url_fallback() {
    proptest!(|(url in prop::option::of("postgresql://[a-z]{3,10}/[a-z]{3,10}"))| {
        let settings = Settings {
            database_url: url.clone(),
            ..Settings::default()
        };

        match url {
            Some(configured) => prop_assert_eq!(settings.effective_database_url(), configured),
            None => prop_assert_eq!(settings.effective_database_url(), DEV_DATABASE_URL),
        }
    });
}

// ============================================================================
// Environment variable loading
// ============================================================================

// ALLOWED_ORIGINS is only touched by this test, so it cannot race with the
// other tests in this binary.
#[test]
fn test_load_reads_allowed_origins_from_environment() {
    std::env::set_var("ALLOWED_ORIGINS", "http://a,http://b");
    let settings = Settings::load().expect("load from environment");
    std::env::remove_var("ALLOWED_ORIGINS");

    assert_eq!(settings.allowed_origins_list(), vec!["http://a", "http://b"]);
}

#[test]
fn test_load_with_nothing_set_yields_development_defaults() {
    let settings = Settings::load().expect("load from environment");
    // ENVIRONMENT is not set in the test environment.
    assert!(settings.is_development());
    assert!(!settings.is_production());
    assert_eq!(settings.redis_url, None);
}
