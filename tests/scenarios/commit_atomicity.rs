//! The commit pipeline is a unit: a store failure leaves the in-memory
//! collections exactly as they were, and the draft can simply be retried.

use cavalcade::{AssignmentEngine, EngineError, LegDirection, SequentialIds, Waypoint};

use crate::common::fixtures::{day, seed};
use crate::common::stores::FlakyStore;

#[test]
fn failed_flush_leaves_state_untouched_and_retry_succeeds() {
    let (store, fail_next) = FlakyStore::new(seed());
    let mut engine =
        AssignmentEngine::load(store, Box::new(SequentialIds::new("id"))).unwrap();

    let mut draft = engine.begin_edit("ev-champ").unwrap();
    let leg = engine.add_leg(&mut draft, LegDirection::Outbound).unwrap();
    engine
        .set_leg_departure(&mut draft, &leg, Waypoint::new("Stables").on(day(10)))
        .unwrap();
    engine
        .set_leg_arrival(&mut draft, &leg, Some(Waypoint::new("Showground").on(day(12))))
        .unwrap();
    engine.set_leg_vehicle(&mut draft, &leg, Some("veh-lorry")).unwrap();

    fail_next.set(true);
    let err = engine.commit(&draft).unwrap_err();
    assert!(matches!(err, EngineError::Persistence(_)));

    // No stage of the pipeline leaked into shared state.
    assert!(engine.leg(&leg).is_err());
    assert!(engine.budget_items_for_event("ev-champ").unwrap().is_empty());
    assert!(engine.vehicle("veh-lorry").unwrap().assigned_events.is_empty());

    // The draft is still in hand; the retry commits cleanly.
    let summary = engine.commit(&draft).unwrap();
    assert_eq!(summary.derived_items, 1);
    assert_eq!(
        engine.vehicle("veh-lorry").unwrap().assigned_events,
        vec!["ev-champ"]
    );
    assert_eq!(
        engine.budget_items_for_event("ev-champ").unwrap()[0].estimated_cost,
        240.0
    );
}

#[test]
fn failed_manual_item_write_is_not_applied() {
    let (store, fail_next) = FlakyStore::new(seed());
    let mut engine =
        AssignmentEngine::load(store, Box::new(SequentialIds::new("id"))).unwrap();

    fail_next.set(true);
    let err = engine
        .add_manual_item(
            "ev-champ",
            cavalcade::BudgetCategory::Salaries,
            "Extra groom",
            90.0,
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::Persistence(_)));
    assert!(engine.budget_items_for_event("ev-champ").unwrap().is_empty());
}
