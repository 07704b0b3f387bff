//! # Integration Test Flows
//!
//! ## Flows Tested:
//!
//! 1. **Config file -> validator**: TOML whitelist and NAT extras drive decisions
//! 2. **JSON announcement -> accepted record -> join info**
//! 3. **Shared validator**: one cached address snapshot serves many threads
//! 4. **Telemetry**: subscriber installs once, rejections log through it

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use parking_lot::Mutex;

    use sd_01_announce_validation::{
        classify_session_id, AnnouncementError, AnnouncementValidationApi, AnnouncementValidator,
        CachedLocalAddresses, ConfigError, ConfigProvider, LocalAddressProvider, LocalAddressSet,
        QueryOptions, RejectionReason, SessionAnnouncement, SessionIdKind, StaticLocalAddresses,
        TomlConfigProvider, ValidationConfig, UNKNOWN_DRAWING_USERS,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const SERVER_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5));
    const NAT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));
    const REMOTE_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 20));

    const SERVER_CONFIG: &str = r#"
[protocol]
whitelist = ["dp:4.24.0", " dp:4.21.2 ", ""]

[local_addresses]
refresh_secs = 30
extra = ["203.0.113.7"]
"#;

    fn validator_from_toml(content: &str) -> AnnouncementValidator<StaticLocalAddresses> {
        let provider = TomlConfigProvider::parse(content).expect("config should parse");
        AnnouncementValidator::from_config_provider(
            &provider,
            StaticLocalAddresses::with_addrs(vec![SERVER_IP]),
        )
    }

    fn announcement_json(host: &str, protocol: &str) -> String {
        format!(
            r#"{{
                "realm": "public",
                "host": "{host}",
                "port": 27750,
                "id": "my-session",
                "protocol": "{protocol}",
                "title": "Sketch night",
                "users": 3,
                "usernames": ["alice", "bob", "carol"],
                "password": false,
                "nsfm": false,
                "owner": "alice",
                "started": "2024-05-01 18:00:00"
            }}"#
        )
    }

    // =============================================================================
    // FLOW 1: CONFIG FILE -> VALIDATOR
    // =============================================================================

    #[test]
    fn test_toml_config_normalizes_whitelist() {
        let provider = TomlConfigProvider::parse(SERVER_CONFIG).unwrap();
        let config = provider.validation_config();

        assert_eq!(config.protocol_whitelist, vec!["dp:4.24.0", "dp:4.21.2"]);
        assert_eq!(config.local_address_refresh_secs, 30);
        assert_eq!(config.extra_local_addresses, vec![NAT_IP]);
    }

    #[test]
    fn test_whitelist_replaces_format_check() {
        let validator = validator_from_toml(SERVER_CONFIG);

        assert!(validator.validate_session_update("s1", "dp:4.24.0").is_ok());
        assert!(validator.validate_session_update("s1", "dp:4.21.2").is_ok());

        // Well-formed but not listed
        assert_eq!(
            validator.validate_session_update("s1", "dp:4.20.1"),
            Err(AnnouncementError::UnsupportedProtocol("dp:4.20.1".into()))
        );
        // Legacy shape no longer inferred
        assert!(validator.validate_session_update("s1", "4.20").is_err());
    }

    #[test]
    fn test_empty_config_falls_back_to_format_check() {
        let validator = validator_from_toml("");

        assert!(validator.validate_session_update("s1", "dp:4.20.1").is_ok());
        assert!(validator.validate_session_update("s1", "4.20").is_ok());
        assert!(validator.validate_session_update("s1", "dp:4.20").is_err());
    }

    #[test]
    fn test_nat_address_from_config_is_trusted() {
        let validator = validator_from_toml(SERVER_CONFIG);

        // The public NAT address is this server, so any explicit claim goes
        assert_eq!(validator.validate_hostname("localhost", NAT_IP), Ok(()));
        assert_eq!(
            validator.validate_hostname("", NAT_IP),
            Err(RejectionReason::LocalRequiresExplicitHost)
        );
    }

    #[test]
    fn test_config_file_round_trip_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SERVER_CONFIG.as_bytes()).unwrap();

        let provider = TomlConfigProvider::load(file.path()).unwrap();
        assert_eq!(provider.validation_config().protocol_whitelist.len(), 2);
    }

    #[test]
    fn test_config_errors_surface_cleanly() {
        let missing = TomlConfigProvider::load("/nonexistent/sd-config.toml");
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let typo = TomlConfigProvider::parse("[protocol]\nwhitelst = []\n");
        assert!(matches!(typo, Err(ConfigError::Parse(_))));

        let bad_extra = TomlConfigProvider::parse("[local_addresses]\nextra = [\"nat.example\"]\n");
        assert!(matches!(bad_extra, Err(ConfigError::Invalid(_))));
    }

    // =============================================================================
    // FLOW 2: JSON ANNOUNCEMENT -> ACCEPTED RECORD -> JOIN INFO
    // =============================================================================

    #[test]
    fn test_remote_announcement_without_host_gets_observed_address() {
        let validator = validator_from_toml(SERVER_CONFIG);
        let announcement: SessionAnnouncement =
            serde_json::from_str(&announcement_json("", "dp:4.24.0")).unwrap();

        assert_eq!(announcement.active_drawing_users, UNKNOWN_DRAWING_USERS);
        assert_eq!(announcement.max_users, None);

        let accepted = validator
            .validate_announcement(&announcement, REMOTE_IP)
            .unwrap();
        let join = validator.join_info(&accepted);

        assert_eq!(join.host, "198.51.100.20");
        assert_eq!(join.host_address(), "198.51.100.20:27750");
        assert_eq!(join.id, "my-session");
    }

    #[test]
    fn test_remote_announcement_with_dns_name_is_kept() {
        let validator = validator_from_toml(SERVER_CONFIG);
        let announcement: SessionAnnouncement =
            serde_json::from_str(&announcement_json("draw.example.com", "dp:4.24.0")).unwrap();

        let accepted = validator
            .validate_announcement(&announcement, REMOTE_IP)
            .unwrap();
        assert_eq!(accepted, announcement);
        assert_eq!(
            validator.join_info(&accepted).host_address(),
            "draw.example.com:27750"
        );
    }

    #[test]
    fn test_remote_announcement_claiming_address_is_refused() {
        let validator = validator_from_toml(SERVER_CONFIG);
        let announcement: SessionAnnouncement =
            serde_json::from_str(&announcement_json("10.0.0.5", "dp:4.24.0")).unwrap();

        assert_eq!(
            validator.validate_announcement(&announcement, REMOTE_IP),
            Err(AnnouncementError::Host(RejectionReason::TrustViolation))
        );
    }

    #[test]
    fn test_ipv6_announcer_join_address_is_bracketed() {
        let validator = validator_from_toml("");
        let announcer = IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 0x42));
        let announcement: SessionAnnouncement =
            serde_json::from_str(&announcement_json("", "dp:4.20.1")).unwrap();

        let accepted = validator
            .validate_announcement(&announcement, announcer)
            .unwrap();
        assert_eq!(
            validator.join_info(&accepted).host_address(),
            "[2001:db8::42]:27750"
        );
    }

    #[test]
    fn test_server_assigned_uuid_ids_are_accepted() {
        let validator = validator_from_toml("");

        for _ in 0..32 {
            let id = uuid::Uuid::new_v4().to_string();
            assert!(validator.validate_session_update(&id, "dp:4.20.1").is_ok());
            assert!(matches!(
                classify_session_id(&id),
                Some(SessionIdKind::Canonical(_))
            ));
        }
    }

    #[test]
    fn test_listing_protocol_filter_drops_unknown_versions() {
        let validator = validator_from_toml(SERVER_CONFIG);
        let query = QueryOptions {
            protocol: "dp:4.24.0, dp:4.20.1,,dp:4.21.2, junk".into(),
            ..QueryOptions::default()
        };

        assert_eq!(
            validator.protocol_filter(&query),
            vec!["dp:4.24.0".to_string(), "dp:4.21.2".to_string()]
        );
    }

    #[test]
    fn test_accepted_record_serializes_with_wire_names() {
        let validator = validator_from_toml("");
        let announcement = SessionAnnouncement {
            host: "draw.example.com".into(),
            port: 27750,
            id: "my-session".into(),
            protocol: "dp:4.20.1".into(),
            max_users: Some(10),
            allow_web: true,
            ..SessionAnnouncement::default()
        };

        let accepted = validator
            .validate_announcement(&announcement, REMOTE_IP)
            .unwrap();
        let value = serde_json::to_value(&accepted).unwrap();

        assert_eq!(value["maxusers"], 10);
        assert_eq!(value["allowweb"], true);
        assert_eq!(value["activedrawingusers"], -1);
        assert!(value.get("private").is_none());
    }

    // =============================================================================
    // FLOW 3: SHARED VALIDATOR ACROSS THREADS
    // =============================================================================

    /// Provider that records how often it was asked to enumerate.
    struct CountingProvider {
        calls: Mutex<u32>,
        addrs: Vec<IpAddr>,
    }

    impl LocalAddressProvider for CountingProvider {
        fn local_addresses(&self) -> LocalAddressSet {
            *self.calls.lock() += 1;
            LocalAddressSet::from_addrs(self.addrs.iter().copied())
        }
    }

    #[test]
    fn test_cached_snapshot_shared_by_request_threads() {
        let provider = Arc::new(CountingProvider {
            calls: Mutex::new(0),
            addrs: vec![SERVER_IP],
        });
        let cached = CachedLocalAddresses::new(provider.clone(), Duration::from_secs(60));
        let validator = Arc::new(AnnouncementValidator::new(
            ValidationConfig::for_testing(),
            cached,
        ));

        // Warm the snapshot so every thread reads the same one
        assert_eq!(validator.validate_hostname("localhost", SERVER_IP), Ok(()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let validator = Arc::clone(&validator);
                thread::spawn(move || {
                    for _ in 0..50 {
                        assert_eq!(validator.validate_hostname("localhost", SERVER_IP), Ok(()));
                        assert_eq!(
                            validator.validate_hostname("127.0.0.1", REMOTE_IP),
                            Err(RejectionReason::TrustViolation)
                        );
                        let host = format!("host{i}.example.com");
                        assert_eq!(validator.validate_hostname(&host, REMOTE_IP), Ok(()));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(*provider.calls.lock(), 1);
    }

    // =============================================================================
    // FLOW 4: TELEMETRY
    // =============================================================================

    #[test]
    fn test_telemetry_initializes_once() {
        use sd_telemetry::{init_telemetry, log_event, TelemetryConfig, TelemetryError};

        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::for_subsystem("01", "announce-validation")
        };

        let first = init_telemetry(&config);
        let second = init_telemetry(&config);
        assert!(first.is_ok(), "{first:?}");
        assert!(matches!(second, Err(TelemetryError::SubscriberInit(_))));

        // Rejections log through the installed subscriber without panicking
        let validator = validator_from_toml(SERVER_CONFIG);
        let reason = validator
            .validate_hostname("localhost", REMOTE_IP)
            .unwrap_err();
        log_event!(warn, "announce", "rejected host claim", reason = reason.as_str());
    }
}
