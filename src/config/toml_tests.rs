//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_select_section() {
        let toml = r#"
            [select]
            network = "udp"
            policy = ["shuffle", "max:4"]
            seed = 7
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let select = &config.select;

        assert_eq!(select.network.as_deref(), Some("udp"));
        assert_eq!(select.policy, vec!["shuffle", "max:4"]);
        assert_eq!(select.seed, Some(7));
    }

    #[test]
    fn parse_output_section() {
        let toml = r#"
            [output]
            format = "json"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.select.network.is_none());
        assert!(config.select.policy.is_empty());
        assert!(config.select.seed.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn parse_partial_select_section() {
        let toml = r#"
            [select]
            policy = ["first-each"]
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert!(config.select.network.is_none());
        assert_eq!(config.select.policy, vec!["first-each"]);
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[resolver]\nhost = \"x\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [select]
            network = "tcp"
            strategy = "fast"
        "#;

        assert!(matches!(
            TomlConfig::parse(toml),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let toml = r#"
            [select]
            policy = "first"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn negative_seed_is_rejected() {
        let toml = "[select]\nseed = -1";
        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::path::Path::new("/nonexistent/addr-pick.toml");
        let result = TomlConfig::load(path);

        match result {
            Err(ConfigError::FileRead { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected FileRead error, got {other:?}"),
        }
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let template = default_config_template();
        let config = TomlConfig::parse(&template).unwrap();

        assert_eq!(config.select.network.as_deref(), Some("tcp"));
        assert_eq!(config.select.policy, vec!["default"]);
        assert!(config.select.seed.is_none());
    }

    #[test]
    fn default_template_documents_every_policy() {
        let template = default_config_template();
        for name in [
            "default",
            "all",
            "first",
            "first-each",
            "first-ipv4",
            "first-ipv6",
            "ipv4",
            "ipv6",
            "max:N",
            "reverse",
            "shuffle",
        ] {
            assert!(template.contains(name), "template is missing {name}");
        }
    }
}
