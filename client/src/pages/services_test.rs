use super::*;
use std::collections::HashSet;

#[test]
fn service_ids_are_unique() {
    let catalog = service_catalog();
    let ids: HashSet<&str> = catalog.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn every_service_has_copy() {
    for service in service_catalog() {
        assert!(!service.name.is_empty());
        assert!(!service.summary.is_empty());
    }
}
