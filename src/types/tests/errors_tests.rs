use crate::types::errors::PackError;

#[test]
fn test_pack_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err = PackError::from(io_err);

    match err {
        PackError::Io(msg) => assert!(msg.contains("access denied")),
        _ => panic!("Expected PackError::Io"),
    }
}

#[test]
fn test_pack_error_from_invalid_zip() {
    let zip_err = zip::result::ZipError::InvalidArchive("bad central directory".into());
    let err = PackError::from(zip_err);
    assert!(matches!(err, PackError::Format(_)));
}

#[test]
fn test_pack_error_serialization() {
    let err = PackError::Format("links.txt not found".to_string());

    // PackError serializes as just its Display string
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Invalid package: links.txt not found\"");
}
