use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RasticaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RasticaError::scene("x").to_string().contains("scene error:"));
    assert!(
        RasticaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RasticaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
