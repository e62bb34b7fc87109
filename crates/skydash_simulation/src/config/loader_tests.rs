//! Tests for config loading and validation.

#[cfg(test)]
mod tests {
    use crate::config::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SkydashConfig::default().validate().is_ok());
    }

    #[test]
    fn test_dash_duration_from_power_and_distance() {
        let tuning = ControllerTuning {
            dash_power: 10.0,
            dash_distance: 5.0,
            move_speed: 5.0,
            ..Default::default()
        };

        assert!((tuning.dash_duration() - 0.1).abs() < 1e-6);
        assert_eq!(tuning.dash_speed(), 50.0);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let source = r#"(
            tuning: (
                coyote_time: 0.2,
                jump_gate: StrictGround,
            ),
            weapon: (
                name: "Hammer",
                target_count: 1,
                kind: Slash(swing_time: 0.4),
            ),
        )"#;

        let config = SkydashConfig::from_ron_str(source).expect("valid config");
        assert_eq!(config.tuning.coyote_time, 0.2);
        assert_eq!(config.tuning.jump_gate, JumpGate::StrictGround);
        assert_eq!(config.tuning.max_jumps, 2);
        assert_eq!(config.weapon.name, "Hammer");
        assert_eq!(config.weapon.kind, WeaponKind::Slash { swing_time: 0.4 });
    }

    #[test]
    fn test_negative_tunable_rejected() {
        let source = "(coyote_time: -0.1)";
        let err = ControllerTuning::from_ron_str(source).unwrap_err();
        assert!(matches!(err, ConfigError::Negative { field: "coyote_time", .. }));
    }

    #[test]
    fn test_zero_dash_speed_rejected_when_distance_set() {
        let tuning = ControllerTuning {
            dash_power: 0.0,
            dash_distance: 5.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::NonPositive { .. })));

        // Без дистанции dash отключён — нулевая скорость допустима
        let disabled = ControllerTuning {
            dash_power: 0.0,
            dash_distance: 0.0,
            ..Default::default()
        };
        assert!(disabled.validate().is_ok());
    }

    #[test]
    fn test_weapon_kind_validation() {
        let weapon = WeaponConfig {
            kind: WeaponKind::Bash { dash_power: 0.0 },
            ..Default::default()
        };
        assert!(matches!(
            weapon.validate(),
            Err(ConfigError::NonPositive { field: "kind.dash_power", .. })
        ));
    }

    #[test]
    fn test_parse_error_reports_source() {
        let err = SkydashConfig::from_ron_str("(tuning: [").unwrap_err();
        let ConfigError::Parse { file, .. } = err else {
            panic!("expected parse error");
        };
        assert_eq!(file, "<inline>");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(std::path::Path::new("/nonexistent/skydash.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
