use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.segments, DEFAULT_SEGMENTS);
    assert_eq!(cfg.cut_overshoot, CUT_OVERSHOOT);
    assert_eq!(cfg.part_spacing, PART_SPACING);
}

#[test]
fn new_accepts_reasonable_values() {
    let cfg = GeneratorConfig::new(16, 0.1, 2.0).expect("valid config");
    assert_eq!(cfg.segments, 16);
    assert_eq!(cfg.cut_overshoot, 0.1);
}

#[test]
fn new_rejects_degenerate_segments() {
    assert_eq!(
        GeneratorConfig::new(2, 0.1, 2.0),
        Err(ConfigError::InvalidSegments(2))
    );
}

#[test]
fn new_rejects_nonpositive_overshoot() {
    assert_eq!(
        GeneratorConfig::new(16, 0.0, 2.0),
        Err(ConfigError::InvalidOvershoot(0.0))
    );
}

#[test]
fn new_rejects_negative_spacing() {
    assert_eq!(
        GeneratorConfig::new(16, 0.1, -1.0),
        Err(ConfigError::InvalidSpacing(-1.0))
    );
}

#[test]
fn config_error_messages_name_the_field() {
    assert!(ConfigError::InvalidSegments(2).to_string().contains("segments"));
    assert!(ConfigError::InvalidOvershoot(-0.5)
        .to_string()
        .contains("cut_overshoot"));
}
