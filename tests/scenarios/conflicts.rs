//! Conflict enforcement at commit time.
//!
//! Conflict-freedom is a data invariant, not just an annotation for the
//! edit surface: a draft whose assignments are unavailable must not commit.

use cavalcade::{
    AvailabilityStatus, DateRange, EngineError, LegDirection, Waypoint,
};

use crate::common::fixtures::{day, engine};

#[test]
fn double_booked_vehicle_is_rejected_at_commit() {
    let mut engine = engine();

    // Lorry on the camp, days 4..5.
    let mut draft = engine.begin_edit("ev-camp").unwrap();
    let camp_leg = engine.add_leg(&mut draft, LegDirection::Outbound).unwrap();
    engine
        .set_leg_departure(&mut draft, &camp_leg, Waypoint::new("Hillside").on(day(4)))
        .unwrap();
    engine
        .set_leg_arrival(&mut draft, &camp_leg, Some(Waypoint::new("Camp").on(day(5))))
        .unwrap();
    engine
        .set_leg_vehicle(&mut draft, &camp_leg, Some("veh-lorry"))
        .unwrap();
    engine.commit(&draft).unwrap();

    // Same lorry on the overlapping clinic.
    let mut draft = engine.begin_edit("ev-clinic").unwrap();
    let clinic_leg = engine.add_leg(&mut draft, LegDirection::Outbound).unwrap();
    engine
        .set_leg_departure(&mut draft, &clinic_leg, Waypoint::new("Arena").on(day(5)))
        .unwrap();
    engine
        .set_leg_vehicle(&mut draft, &clinic_leg, Some("veh-lorry"))
        .unwrap();

    let err = engine.commit(&draft).unwrap_err();
    assert!(matches!(err, EngineError::Conflict { .. }));
    assert!(err.to_string().contains("veh-lorry"));

    // Nothing about the failed commit landed.
    assert!(engine.budget_items_for_event("ev-clinic").unwrap().is_empty());
    assert!(engine.legs_for_event("ev-clinic").unwrap().is_empty());
}

#[test]
fn availability_query_annotates_the_double_booking() {
    let mut engine = engine();

    let mut draft = engine.begin_edit("ev-camp").unwrap();
    let camp_leg = engine.add_leg(&mut draft, LegDirection::Outbound).unwrap();
    engine
        .set_leg_departure(&mut draft, &camp_leg, Waypoint::new("Hillside").on(day(4)))
        .unwrap();
    engine
        .set_leg_vehicle(&mut draft, &camp_leg, Some("veh-lorry"))
        .unwrap();
    engine.commit(&draft).unwrap();

    let availability = engine
        .vehicle_availability("veh-lorry", &DateRange::new(day(4), day(6)), None)
        .unwrap();
    assert_eq!(availability.status, AvailabilityStatus::Assigned);
    assert!(availability.reason.contains("ev-camp"));

    // Excluding the leg under edit removes the self-conflict.
    let availability = engine
        .vehicle_availability("veh-lorry", &DateRange::new(day(4), day(6)), Some(&camp_leg))
        .unwrap();
    assert!(availability.is_available());
}

#[test]
fn maintenance_day_blocks_the_vehicle() {
    let mut engine = engine();

    let availability = engine
        .vehicle_availability("veh-van", &DateRange::new(day(11), day(11)), None)
        .unwrap();
    assert_eq!(availability.status, AvailabilityStatus::Maintenance);

    let mut draft = engine.begin_edit("ev-champ").unwrap();
    let leg = engine.add_leg(&mut draft, LegDirection::Outbound).unwrap();
    engine
        .set_leg_departure(&mut draft, &leg, Waypoint::new("Stables").on(day(10)))
        .unwrap();
    engine
        .set_leg_arrival(&mut draft, &leg, Some(Waypoint::new("Showground").on(day(12))))
        .unwrap();
    engine.set_leg_vehicle(&mut draft, &leg, Some("veh-van")).unwrap();

    let err = engine.commit(&draft).unwrap_err();
    assert!(matches!(err, EngineError::Conflict { .. }));
    assert!(err.to_string().contains("maintenance"));
}

#[test]
fn staff_member_on_an_overlapping_event_is_rejected() {
    let mut engine = engine();

    // st-coach is already on the camp (days 1..5); the clinic overlaps.
    let availability = engine
        .staff_availability("st-coach", &DateRange::new(day(4), day(6)), Some("ev-clinic"))
        .unwrap();
    assert_eq!(availability.status, AvailabilityStatus::Assigned);
    assert!(availability.reason.contains("Summer camp"));

    let mut draft = engine.begin_edit("ev-clinic").unwrap();
    engine
        .set_role_assignment(&mut draft, "coach", vec!["st-coach".to_string()])
        .unwrap();

    let err = engine.commit(&draft).unwrap_err();
    assert!(matches!(err, EngineError::Conflict { .. }));

    // The disjoint championship can still have the coach.
    let mut draft = engine.begin_edit("ev-champ").unwrap();
    engine
        .set_role_assignment(&mut draft, "coach", vec!["st-coach".to_string()])
        .unwrap();
    engine.commit(&draft).unwrap();
    assert!(engine
        .staff_member("st-coach")
        .unwrap()
        .assigned_events
        .contains(&"ev-champ".to_string()));
}

#[test]
fn leg_without_dates_commits_despite_maintenance() {
    let mut engine = engine();

    // Availability is undefined without dates and must not block the edit.
    let mut draft = engine.begin_edit("ev-champ").unwrap();
    let leg = engine.add_leg(&mut draft, LegDirection::Outbound).unwrap();
    engine.set_leg_vehicle(&mut draft, &leg, Some("veh-van")).unwrap();

    engine.commit(&draft).unwrap();
    // No departure date: no derived cost either.
    assert!(engine.budget_items_for_event("ev-champ").unwrap().is_empty());
}

#[test]
fn inverted_leg_range_fails_validation_before_any_write() {
    let mut engine = engine();

    let mut draft = engine.begin_edit("ev-champ").unwrap();
    let leg = engine.add_leg(&mut draft, LegDirection::Outbound).unwrap();
    engine
        .set_leg_departure(&mut draft, &leg, Waypoint::new("Stables").on(day(12)))
        .unwrap();
    engine
        .set_leg_arrival(&mut draft, &leg, Some(Waypoint::new("Showground").on(day(10))))
        .unwrap();

    let err = engine.commit(&draft).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRange { .. }));
    assert!(engine.legs_for_event("ev-champ").unwrap().is_empty());
}
