use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BannerError::schema_mismatch("x")
            .to_string()
            .contains("schema mismatch error:")
    );
    assert!(
        BannerError::missing_field("x")
            .to_string()
            .contains("missing required field error:")
    );
    assert!(
        BannerError::invalid_range("x")
            .to_string()
            .contains("invalid range error:")
    );
    assert!(
        BannerError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BannerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn decode_errors_are_classified() {
    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Probe {
        width: f64,
    }

    let missing = serde_json::from_value::<Probe>(serde_json::json!({})).unwrap_err();
    assert_eq!(
        BannerError::from_decode("probe", missing).kind(),
        ErrorKind::MissingRequiredField
    );

    let wrong = serde_json::from_value::<Probe>(serde_json::json!({ "width": "wide" })).unwrap_err();
    assert_eq!(
        BannerError::from_decode("probe", wrong).kind(),
        ErrorKind::SchemaMismatch
    );

    let syntax = serde_json::from_str::<Probe>("{").unwrap_err();
    assert_eq!(BannerError::from_decode("probe", syntax).kind(), ErrorKind::Serde);
}

#[test]
fn formatting_failures_surface_as_other() {
    let err = BannerError::from(std::fmt::Error);
    assert_eq!(err.kind(), ErrorKind::Other);
    assert!(err.to_string().contains("formatting output"));
}
