// File: crates/radar-core/tests/metrics.rs
// Purpose: MetricSet ordering and name invariants.

use radar_core::metrics::is_in_scale;
use radar_core::{MetricSet, RadarError};

#[test]
fn keeps_insertion_order() {
    let m = MetricSet::from_pairs([("Wolf", 3), ("Lion", 5), ("Owl", 1)]).expect("valid set");
    assert_eq!(m.names().collect::<Vec<_>>(), ["Wolf", "Lion", "Owl"]);
    assert_eq!(m.values().collect::<Vec<_>>(), [3.0, 5.0, 1.0]);
    assert_eq!(m.get("Lion"), Some(5.0));
    assert_eq!(m.get("Fox"), None);
    assert_eq!(m.len(), 3);
}

#[test]
fn rejects_blank_and_duplicate_names() {
    let mut m = MetricSet::new();
    assert_eq!(m.insert("  ", 3), Err(RadarError::EmptyCategory));
    m.insert("Fox", 2).expect("first insert");
    assert_eq!(m.insert("Fox", 4), Err(RadarError::DuplicateCategory("Fox".into())));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("Fox"), Some(2.0));
}

#[test]
fn scale_check_is_inclusive() {
    assert!(is_in_scale(1.0));
    assert!(is_in_scale(5.0));
    assert!(!is_in_scale(0.0));
    assert!(!is_in_scale(5.5));
}
