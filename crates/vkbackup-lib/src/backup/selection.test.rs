use super::*;

fn record(id: u32, codes: &[&str], likes: u64) -> PhotoRecord {
    let sizes = codes
        .iter()
        .map(|code| SizeVariant::new(format!("https://cdn.example/{id}/{code}.jpg"), *code))
        .collect();
    PhotoRecord::new("1", sizes, likes)
}

fn listing(n: u32) -> Vec<PhotoRecord> {
    (0..n).map(|id| record(id, &["s", "m", "x"], u64::from(id))).collect()
}

#[test]
fn test_returns_min_of_quantity_and_count() {
    for n in 0..6u32 {
        for quantity in 0..8usize {
            let selection = select_photos(&listing(n), quantity);
            assert_eq!(
                selection.photos.len(),
                quantity.min(n as usize),
                "n = {n}, quantity = {quantity}"
            );
        }
    }
}

#[test]
fn test_preserves_source_order() {
    let selection = select_photos(&listing(5), 3);
    let likes: Vec<u64> = selection.photos.iter().map(|p| p.like_count).collect();
    assert_eq!(likes, vec![0, 1, 2]);
}

#[test]
fn test_uses_winning_variant_code_and_url() {
    let records = vec![record(7, &["w", "s", "y"], 12)];
    let selection = select_photos(&records, DEFAULT_QUANTITY);

    assert_eq!(
        selection.photos,
        vec![SelectedPhoto {
            url: "https://cdn.example/7/w.jpg".to_string(),
            like_count: 12,
            size_code: SizeCode::W,
        }]
    );
}

#[test]
fn test_zero_quantity_is_empty() {
    let selection = select_photos(&listing(3), 0);
    assert!(selection.is_empty());
    assert!(selection.skipped.is_empty());
}

#[test]
fn test_unknown_code_is_skipped_not_fatal() {
    let records = vec![
        record(0, &["s", "z"], 3),
        record(1, &["s", "huge"], 4),
        record(2, &["m"], 5),
    ];

    let selection = select_photos(&records, 3);
    assert_eq!(selection.photos.len(), 2);
    assert_eq!(selection.photos[1].like_count, 5);
    assert_eq!(selection.skipped.len(), 1);
    assert_eq!(selection.skipped[0].index, 1);
    assert!(matches!(
        selection.skipped[0].error,
        SelectionError::UnknownSizeCode { ref code, .. } if code == "huge"
    ));
}

#[test]
fn test_skipped_photo_is_not_replaced() {
    let records = vec![record(0, &["bad"], 1), record(1, &["s"], 2)];
    let selection = select_photos(&records, 1);
    assert!(selection.photos.is_empty());
    assert_eq!(selection.skipped.len(), 1);
}

#[test]
fn test_record_accessors() {
    let photo = record(9, &["o"], 42);
    assert_eq!(photo.owner_id(), "1");
    assert_eq!(photo.like_count(), 42);
    assert_eq!(photo.sizes().len(), 1);
}
