use super::*;
use std::collections::HashSet;

#[test]
fn plan_ids_are_unique() {
    let plans = pricing_plans();
    let ids: HashSet<&str> = plans.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), plans.len());
}

#[test]
fn prices_are_checkout_formatted() {
    for plan in pricing_plans() {
        assert!(plan.price.parse::<f64>().is_ok(), "{} price not numeric", plan.id);
        assert!(plan.price.ends_with(".00"), "{} price not dollar-formatted", plan.id);
    }
}

#[test]
fn plan_lookup_finds_known_ids() {
    assert_eq!(plan_or_default(Some("studio")).id, "studio");
    assert_eq!(plan_or_default(Some("scale")).id, "scale");
}

#[test]
fn plan_lookup_falls_back_to_starter() {
    assert_eq!(plan_or_default(None).id, "starter");
    assert_eq!(plan_or_default(Some("enterprise")).id, "starter");
}
