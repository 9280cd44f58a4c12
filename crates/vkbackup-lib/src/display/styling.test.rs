use super::*;

#[test]
fn test_plain_styling_has_no_escape_codes() {
    let styling = StyleManager::new(false);
    assert_eq!(styling.style_success("done"), "done");
    assert_eq!(styling.format_error("failed"), "[error] failed");
    assert_eq!(styling.format_warning("careful"), "[warn] careful");
    assert!(!styling.format_info("note").contains('\u{1b}'));
}

#[test]
fn test_color_styling_wraps_text() {
    let styling = StyleManager::new(true);
    let styled = styling.style_error("failed");
    assert!(styled.contains("failed"));
    assert!(styled.contains('\u{1b}'));
    assert!(styling.format_success("ok").contains('✓'));
}
