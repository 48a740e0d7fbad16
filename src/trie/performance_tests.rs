// Scalability checks for lookups against wide and deep trees.

use super::{lookup, Matcher};
use std::time::Instant;

fn resource_tree(count: u32) -> Matcher<u32> {
    let children = (0..count).map(|i| {
        Matcher::static_path(
            format!("resource{i}/"),
            Matcher::wild("id", Matcher::data(i)).unwrap(),
        )
        .unwrap()
    });
    Matcher::static_path("/api/v1/", Matcher::linear(children).unwrap()).unwrap()
}

#[test]
fn test_lookup_performance_with_many_routes() {
    let m = resource_tree(500);

    let start = Instant::now();
    for _ in 0..1000 {
        let found = lookup(&m, "/api/v1/resource250/123").unwrap();
        assert_eq!(*found.data(), 250);
    }
    let duration = start.elapsed();

    assert!(
        duration.as_millis() < 500,
        "Lookup performance degraded: {}ms for 1000 lookups with 500 routes",
        duration.as_millis()
    );
}

#[test]
fn test_deep_tree_lookup() {
    let mut m = Matcher::data(1u32);
    for level in (0..64).rev() {
        m = Matcher::static_path(
            "/",
            Matcher::wild(format!("p{level}"), m).unwrap(),
        )
        .unwrap();
    }
    assert_eq!(m.depth(), 129);

    let path: String = (0..64).map(|i| format!("/{i}")).collect();
    let found = lookup(&m, &path).unwrap();
    assert_eq!(found.parameters().len(), 64);
    assert_eq!(found.parameters().get("p0"), Some("0"));
    assert_eq!(found.parameters().get("p63"), Some("63"));
}

#[test]
fn test_unmatched_lookups_stay_cheap() {
    let m = resource_tree(100);
    for i in 0..100 {
        assert!(lookup(&m, &format!("/api/v2/resource{i}/1")).is_none());
        assert!(lookup(&m, &format!("/api/v1/resource{i}/")).is_none());
    }
}
