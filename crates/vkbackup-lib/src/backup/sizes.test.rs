use super::*;

fn variant(code: &str) -> SizeVariant {
    SizeVariant::new(format!("https://cdn.example/{code}.jpg"), code)
}

#[test]
fn test_ranking_order_matches_table() {
    let letters: Vec<&str> = SizeCode::RANKING.iter().map(|c| c.as_str()).collect();
    assert_eq!(letters, ["s", "m", "x", "o", "p", "q", "r", "y", "z", "w"]);

    for pair in SizeCode::RANKING.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!(pair[0].rank() + 1, pair[1].rank());
    }
}

#[test]
fn test_select_largest_picks_strict_maximum() {
    let variants = vec![variant("s"), variant("z"), variant("m"), variant("y")];

    let (code, best) = select_largest(&variants).unwrap();
    assert_eq!(code, SizeCode::Z);
    assert_eq!(best.url, "https://cdn.example/z.jpg");
}

#[test]
fn test_select_largest_every_position() {
    // The maximum is found wherever it sits in the list
    for position in 0..4 {
        let mut variants = vec![variant("s"), variant("m"), variant("x"), variant("o")];
        variants.insert(position, variant("w"));

        let (code, best) = select_largest(&variants).unwrap();
        assert_eq!(code, SizeCode::W);
        assert_eq!(best.url, "https://cdn.example/w.jpg");
    }
}

#[test]
fn test_single_variant() {
    let variants = vec![variant("x")];
    let (code, best) = select_largest(&variants).unwrap();
    assert_eq!(code, SizeCode::X);
    assert_eq!(best.code, "x");
}

#[test]
fn test_unknown_code_fails() {
    let variants = vec![variant("s"), variant("base"), variant("z")];

    let err = select_largest(&variants).unwrap_err();
    assert_eq!(
        err,
        SelectionError::UnknownSizeCode {
            code: "base".to_string(),
            url: "https://cdn.example/base.jpg".to_string(),
        }
    );
}

#[test]
fn test_empty_variants_fail() {
    assert_eq!(select_largest(&[]).unwrap_err(), SelectionError::NoSizes);
}

#[test]
fn test_size_code_parse_is_case_sensitive() {
    assert_eq!("q".parse::<SizeCode>().unwrap(), SizeCode::Q);
    assert!("Q".parse::<SizeCode>().is_err());
}

#[test]
fn test_variant_deserializes_type_field() {
    let json = r#"{"url": "https://cdn.example/a.jpg", "type": "r", "width": 510, "height": 340}"#;
    let parsed: SizeVariant = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.code, "r");
    assert_eq!(parsed.size_code().unwrap(), SizeCode::R);
}
