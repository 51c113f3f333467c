use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RevealError::feed("x").to_string().contains("feed error:"));
    assert!(RevealError::chain("x").to_string().contains("chain error:"));
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        RevealError::unknown_property("owner").to_string(),
        "unknown property 'owner'"
    );
    assert_eq!(RevealError::EmptyStore.to_string(), "property store is empty");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: RevealError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, RevealError::Serde(_)));
}
