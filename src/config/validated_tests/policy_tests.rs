//! Tests for policy, network and format validation.

use crate::filter::{FilterSpec, SpecParseError};

use super::*;

mod policy {
    use super::*;

    #[test]
    fn every_named_policy_is_accepted() {
        let cli = cli(&[
            "-p", "default", "-p", "all", "-p", "first", "-p", "first-each", "-p",
            "first-ipv4", "-p", "first-ipv6", "-p", "ipv4", "-p", "ipv6", "-p", "max:3", "-p",
            "reverse", "-p", "shuffle",
        ]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(
            config.policy,
            vec![
                FilterSpec::Default,
                FilterSpec::All,
                FilterSpec::First,
                FilterSpec::FirstEach,
                FilterSpec::FirstIpv4,
                FilterSpec::FirstIpv6,
                FilterSpec::Ipv4,
                FilterSpec::Ipv6,
                FilterSpec::Max(3),
                FilterSpec::Reverse,
                FilterSpec::Shuffle,
            ]
        );
        assert!(config.is_random());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["-p", "fastest"]), None);

        match result {
            Err(ConfigError::InvalidPolicy { value, source }) => {
                assert_eq!(value, "fastest");
                assert!(matches!(source, SpecParseError::Unknown(_)));
            }
            other => panic!("Expected InvalidPolicy, got {other:?}"),
        }
    }

    #[test]
    fn zero_max_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["-p", "max:0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidPolicy {
                source: SpecParseError::InvalidMax { .. },
                ..
            })
        ));
    }

    #[test]
    fn invalid_toml_policy_is_rejected() {
        let toml = toml(
            r#"
            [select]
            policy = ["first", "max:many"]
        "#,
        );
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        match result {
            Err(ConfigError::InvalidPolicy { value, .. }) => assert_eq!(value, "max:many"),
            other => panic!("Expected InvalidPolicy, got {other:?}"),
        }
    }

    #[test]
    fn deterministic_policy_is_not_random() {
        let config = ValidatedConfig::from_raw(&cli(&["-p", "max:2"]), None).unwrap();
        assert!(!config.is_random());
    }
}

mod network {
    use super::*;
    use crate::addrs::Network;

    #[test]
    fn toml_network_is_case_insensitive() {
        let toml = toml("[select]\nnetwork = \"UDP\"");
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.network, Network::Udp);
    }

    #[test]
    fn unknown_toml_network_is_rejected() {
        let toml = toml("[select]\nnetwork = \"sctp\"");
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        match result {
            Err(ConfigError::InvalidNetwork { value }) => assert_eq!(value, "sctp"),
            other => panic!("Expected InvalidNetwork, got {other:?}"),
        }
    }
}

mod format {
    use super::*;

    #[test]
    fn toml_format_json() {
        let toml = toml("[output]\nformat = \"JSON\"");
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_toml_format_is_rejected() {
        let toml = toml("[output]\nformat = \"yaml\"");
        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidFormat { value }) if value == "yaml"
        ));
    }
}
