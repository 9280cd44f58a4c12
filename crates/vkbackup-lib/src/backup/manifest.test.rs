use super::*;
use tempfile::TempDir;

fn sample_records() -> Vec<UploadRecord> {
    vec![
        UploadRecord::new("10", "z"),
        UploadRecord::new("10_2024-03-07_9_5_2", "w"),
        UploadRecord::new("3", "x"),
    ]
}

#[test]
fn test_write_then_read_preserves_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(MANIFEST_FILE_NAME);

    let records = sample_records();
    write_manifest(&path, &records).unwrap();

    assert_eq!(read_manifest(&path).unwrap(), records);
}

#[test]
fn test_write_overwrites_previous_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(MANIFEST_FILE_NAME);

    write_manifest(&path, &sample_records()).unwrap();
    write_manifest(&path, &[UploadRecord::new("99", "y")]).unwrap();

    let records = read_manifest(&path).unwrap();
    assert_eq!(records, vec![UploadRecord::new("99", "y")]);
}

#[test]
fn test_wire_field_names_and_indentation() {
    let rendered = render_manifest(&[UploadRecord::new("10", "z")]).unwrap();
    assert_eq!(
        rendered,
        "[\n  {\n    \"file_name\": \"10\",\n    \"size\": \"z\"\n  }\n]"
    );
}

#[test]
fn test_empty_manifest_is_empty_array() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(MANIFEST_FILE_NAME);

    write_manifest(&path, &[]).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    assert!(read_manifest(&path).unwrap().is_empty());
}

#[test]
fn test_read_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_manifest(&temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(ManifestError::Io { .. })));
}

#[test]
fn test_read_garbage_is_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(MANIFEST_FILE_NAME);
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(read_manifest(&path), Err(ManifestError::Json { .. })));
}
