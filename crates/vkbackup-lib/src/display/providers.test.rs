use super::*;

#[test]
fn test_summary_classification() {
    assert!(OperationSummary::new(3, 0).is_success());
    assert!(OperationSummary::new(2, 1).is_partial_success());
    assert!(OperationSummary::new(0, 2).is_failure());

    let nothing = OperationSummary::new(0, 0);
    assert!(!nothing.is_success() && !nothing.is_failure() && !nothing.is_partial_success());
}

#[test]
fn test_summary_display() {
    let summary = OperationSummary::new(4, 1);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.to_string(), "4 successful, 1 failed");
}
