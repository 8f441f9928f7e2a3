use ftk_lib::FtkError;

#[test]
fn config_error_display_includes_message() {
    let err = FtkError::Config("missing file key".to_string());

    assert_eq!(format!("{}", err), "Configuration error: missing file key");
}

#[test]
fn io_error_display_wraps_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let err: FtkError = io_err.into();
    let rendered = format!("{}", err);

    assert!(rendered.starts_with("IO error: "));
    assert!(rendered.contains("disk full"));
}

#[test]
fn figma_api_helper_includes_status_and_message() {
    let err = FtkError::figma_api(Some(reqwest::StatusCode::NOT_FOUND), "not found");

    assert_eq!(
        format!("{}", err),
        "Figma API error (status: Some(404)): not found"
    );
}

#[test]
fn figma_api_helper_handles_missing_status() {
    let err = FtkError::figma_api(None, "missing token");

    assert_eq!(
        format!("{}", err),
        "Figma API error (status: None): missing token"
    );
}

#[test]
fn node_not_found_display_names_node() {
    let err = FtkError::NodeNotFound("1:2".into());

    assert_eq!(format!("{}", err), "Node not found: 1:2");
}
