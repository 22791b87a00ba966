use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LogomotiveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LogomotiveError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LogomotiveError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        LogomotiveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_frame_index_names_frame_and_domain() {
    let err = LogomotiveError::InvalidFrameIndex { frame: 9, total: 8 };
    let msg = err.to_string();
    assert!(msg.contains("invalid frame index 9"));
    assert!(msg.contains("1..=8"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LogomotiveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
