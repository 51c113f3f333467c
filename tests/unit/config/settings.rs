use super::*;

#[test]
fn defaults_match_reference_timing() {
    let cfg = FeedConfig::default();
    assert_eq!(cfg.min_update_interval(), Duration::from_secs(4));
    assert_eq!(cfg.eviction_duration(), Duration::from_secs(1));
    cfg.validate().unwrap();
}

#[test]
fn full_document_parses_with_partial_feed() {
    let cfg = RevealConfig::from_json_str(
        r#"{
            "properties": { "Title of": "Secret Artwork", "Edition of": 1 },
            "token_id": 7,
            "feed": { "eviction_ms": 250 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.token_id, Some(7));
    assert_eq!(cfg.feed.eviction_ms, 250);
    assert_eq!(cfg.feed.min_update_interval_ms, 4_000);
    assert_eq!(cfg.store().len(), 2);
    cfg.validate().unwrap();
}

#[test]
fn bare_map_parses_as_properties() {
    let cfg = RevealConfig::from_json_str(r#"{ "Title of": "Secret Artwork" }"#).unwrap();
    assert_eq!(cfg.properties.len(), 1);
    assert_eq!(cfg.token_id, None);
    assert_eq!(cfg.feed, FeedConfig::default());
}

#[test]
fn validate_rejects_empty_properties() {
    let cfg = RevealConfig::default();
    assert!(matches!(cfg.validate(), Err(RevealError::Validation(_))));
}

#[test]
fn validate_rejects_zero_eviction() {
    let mut cfg = RevealConfig::from_json_str(r#"{ "a": "b" }"#).unwrap();
    cfg.feed.eviction_ms = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        RevealConfig::from_json_str("[1, 2"),
        Err(RevealError::Serde(_))
    ));
}

#[test]
fn load_reports_missing_file() {
    let err = RevealConfig::load(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
