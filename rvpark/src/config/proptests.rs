//! Property-based tests for configuration layering.

use super::schema::{BookingConfig, Config};
use proptest::prelude::*;
use std::path::PathBuf;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,12}\\.db"),
        prop::option::of(1u64..60_000),
        prop::option::of("[a-z]{1,12}\\.log"),
        prop::option::of(prop::option::of(any::<bool>())),
    )
        .prop_map(|(db, timeout, log, booking)| Config {
            database_file: db.map(PathBuf::from),
            busy_timeout_ms: timeout,
            error_log: log.map(PathBuf::from),
            booking: booking.map(|reject_overlaps| BookingConfig { reject_overlaps }),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A field set in the higher layer always wins; an unset one never erases
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        merged.merge(&high);

        prop_assert_eq!(
            &merged.database_file,
            if high.database_file.is_some() { &high.database_file } else { &low.database_file }
        );
        prop_assert_eq!(merged.busy_timeout_ms, high.busy_timeout_ms.or(low.busy_timeout_ms));
        prop_assert_eq!(
            &merged.error_log,
            if high.error_log.is_some() { &high.error_log } else { &low.error_log }
        );

        let high_reject = high.booking.as_ref().and_then(|b| b.reject_overlaps);
        let low_reject = low.booking.as_ref().and_then(|b| b.reject_overlaps);
        prop_assert_eq!(merged.reject_overlaps(), high_reject.or(low_reject).unwrap_or(false));
    }

    // Merging a config onto itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        merged.merge(&config);
        prop_assert_eq!(&merged.database_file, &config.database_file);
        prop_assert_eq!(merged.busy_timeout_ms, config.busy_timeout_ms);
        prop_assert_eq!(merged.reject_overlaps(), config.reject_overlaps());
    }

    // Merging the default configuration is a no-op
    #[test]
    fn merge_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        merged.merge(&Config::default());
        prop_assert_eq!(merged, config);
    }
}
