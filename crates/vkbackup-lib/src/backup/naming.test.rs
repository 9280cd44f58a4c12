use super::*;
use chrono::FixedOffset;

fn fixed_timestamp() -> RunTimestamp {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    let moment = offset.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
    RunTimestamp::from_datetime(&moment)
}

#[test]
fn test_timestamp_format() {
    assert_eq!(fixed_timestamp().to_string(), "2024-03-07_9_5_2");
}

#[test]
fn test_unique_like_counts_keep_plain_names() {
    let mut registry = NameRegistry::new(NamingStrategy::Literal, fixed_timestamp());
    assert_eq!(registry.assign(10), "10");
    assert_eq!(registry.assign(11), "11");
    assert_eq!(registry.assign(0), "0");
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_second_collision_gets_timestamp_suffix() {
    let timestamp = fixed_timestamp();
    let mut registry = NameRegistry::new(NamingStrategy::Literal, timestamp);

    let first = registry.assign(10);
    let second = registry.assign(10);

    assert_eq!(first, "10");
    assert_ne!(first, second);
    assert!(second.contains(&timestamp.to_string()));
    assert_eq!(second, "10_2024-03-07_9_5_2");
}

#[test]
fn test_third_collision_repeats_second_name() {
    // Known limitation of the literal strategy: the suffix is fixed per run
    let mut registry = NameRegistry::new(NamingStrategy::Literal, fixed_timestamp());

    registry.assign(10);
    let second = registry.assign(10);
    let third = registry.assign(10);

    assert_eq!(third, second);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_counter_strategy_always_unique() {
    let mut registry = NameRegistry::new(NamingStrategy::Counter, fixed_timestamp());

    let names: Vec<String> = (0..4).map(|_| registry.assign(10)).collect();
    assert_eq!(names, vec!["10", "10_1", "10_2", "10_3"]);

    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_file_name_appends_jpg() {
    assert_eq!(file_name("10_2024-03-07_9_5_2"), "10_2024-03-07_9_5_2.jpg");
}

#[test]
fn test_registry_starts_empty() {
    let registry = NameRegistry::new(NamingStrategy::default(), RunTimestamp::now());
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}
