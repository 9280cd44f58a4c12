use super::*;

#[test]
fn test_hidden_tracker_counts() {
    let tracker = BarTracker::hidden(3);
    tracker.tick("10.jpg");
    tracker.inc();
    tracker.inc();
    assert_eq!(tracker.position(), 2);
    tracker.finish("done");
}

#[test]
fn test_bar_starts_at_zero() {
    let styling = StyleManager::new(false);
    let tracker = ProgressDisplay::new(&styling).bar("Uploading photos", 4);
    assert_eq!(tracker.position(), 0);
    tracker.abandon("stopped");
}

#[test]
fn test_hidden_tracker_keeps_total() {
    let tracker = BarTracker::hidden(5);
    assert_eq!(tracker.length(), Some(5));
    assert_eq!(tracker.position(), 0);
}

#[test]
fn test_set_length_resizes_bar() {
    let tracker = BarTracker::hidden(5);
    tracker.set_length(2);
    tracker.inc();
    tracker.inc();
    assert_eq!(tracker.length(), Some(2));
    assert_eq!(tracker.position(), 2);
}
