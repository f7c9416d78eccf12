use retro_core::detection::{
    AnnotationPolicy, CentroidRounding, ContourRetrieval, DetectorConfig, ThresholdMode,
    ThresholdSource,
};
use retro_core::{DetectionResult, RetroError, Target};

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_threshold_mode_display() {
    assert_eq!(format!("{}", ThresholdMode::Binary), "Binary");
    assert_eq!(format!("{}", ThresholdMode::BinaryInverted), "Binary Inverted");
    assert_eq!(format!("{}", ThresholdMode::ToZeroInverted), "To Zero Inverted");
}

#[test]
fn test_annotation_policy_display() {
    assert_eq!(format!("{}", AnnotationPolicy::AllTargets), "All Targets");
    assert_eq!(format!("{}", AnnotationPolicy::LastOnly), "Last Only");
}

// ---------------------------------------------------------------------------
// Defaults and validation
// ---------------------------------------------------------------------------

#[test]
fn test_defaults() {
    let config = DetectorConfig::default();
    assert_eq!(config.frame_width, 640);
    assert_eq!(config.frame_height, 480);
    assert_eq!(config.threshold, 200.0);
    assert_eq!(config.threshold_mode, ThresholdMode::Binary);
    assert_eq!(config.threshold_source, ThresholdSource::Fixed);
    assert_eq!(config.retrieval, ContourRetrieval::Tree);
    assert_eq!(config.rounding, CentroidRounding::Truncate);
    assert_eq!(config.annotation, AnnotationPolicy::AllTargets);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_geometry() {
    let config = DetectorConfig::new(640, 0, 200.0, ThresholdMode::Binary);
    assert!(matches!(
        config.validate(),
        Err(RetroError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_threshold_bounds_are_inclusive() {
    assert!(DetectorConfig::new(10, 10, 0.0, ThresholdMode::Binary).validate().is_ok());
    assert!(DetectorConfig::new(10, 10, 255.0, ThresholdMode::Binary).validate().is_ok());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_config_toml_round_trip() {
    let config = DetectorConfig {
        threshold_mode: ThresholdMode::BinaryInverted,
        threshold_source: ThresholdSource::Otsu,
        retrieval: ContourRetrieval::External,
        rounding: CentroidRounding::Nearest,
        annotation: AnnotationPolicy::LastOnly,
        ..DetectorConfig::new(1280, 720, 180.0, ThresholdMode::Binary)
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: DetectorConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let parsed: DetectorConfig = toml::from_str("threshold = 150.0\nframe_width = 320\n").unwrap();
    assert_eq!(parsed.threshold, 150.0);
    assert_eq!(parsed.frame_width, 320);
    assert_eq!(parsed.frame_height, 480);
    assert_eq!(parsed.threshold_mode, ThresholdMode::Binary);
}

#[test]
fn test_result_json_shape() {
    let result = DetectionResult {
        targets: vec![Target::new(-220.0, -140.0), Target::new(220.0, 140.0)],
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "targets": [
                { "centroid": [-220.0, -140.0] },
                { "centroid": [220.0, 140.0] }
            ]
        })
    );
}

#[test]
fn test_empty_result_serializes_empty_list() {
    let text = serde_json::to_string(&DetectionResult::default()).unwrap();
    assert_eq!(text, r#"{"targets":[]}"#);
}
