#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use staylens::sample::{ConfigError, GeneratorConfig};
    use std::path::Path;

    #[test]
    fn test_defaults_match_the_reference_snapshot() {
        let config = GeneratorConfig::default();
        assert_eq!(config.num_dates, 30);
        assert_eq!(config.num_hotels, 5);
        assert_eq!(config.num_bookings, 100);
        assert_eq!(
            config.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: GeneratorConfig = toml::from_str("num_bookings = 10\nseed = 7").unwrap();
        assert_eq!(config.num_bookings, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.num_dates, 30);
        assert_eq!(config.num_hotels, 5);
    }

    #[test]
    fn test_start_date_parses_from_toml() {
        let config: GeneratorConfig = toml::from_str("start_date = \"2023-06-15\"").unwrap();
        assert_eq!(
            config.start_date,
            NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_zero_sizes_are_rejected() {
        let config = GeneratorConfig {
            num_bookings: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_distinct_error() {
        let err = GeneratorConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
