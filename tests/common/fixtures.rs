//! Seeded engines and date helpers.

use cavalcade::{
    AssignmentEngine, DateRange, Event, MemoryStore, SequentialIds, Snapshot, StaffMember,
    Vehicle,
};
use chrono::NaiveDate;

/// A day in the fixture month.
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

/// Three events, two vehicles, three staff members.
///
/// - `ev-champ`: days 10..12, no assignments yet
/// - `ev-camp`: days 1..5, `st-coach` already assigned as coach
/// - `ev-clinic`: days 4..6, overlaps the camp, no assignments yet
/// - `veh-lorry`: 80/day, designated driver `st-driver`
/// - `veh-van`: 100/day, maintenance on day 11
/// - `st-groom`: freelance at 50/day
pub fn seed() -> Snapshot {
    let mut camp = Event::new("ev-camp", "Summer camp")
        .with_range(DateRange::new(day(1), day(5)))
        .with_location("Hillside");
    camp.set_role("coach", vec!["st-coach".to_string()]);

    Snapshot {
        events: vec![
            Event::new("ev-champ", "Regional championship")
                .with_range(DateRange::new(day(10), day(12)))
                .with_location("Showground"),
            camp,
            Event::new("ev-clinic", "Dressage clinic")
                .with_range(DateRange::new(day(4), day(6)))
                .with_location("Indoor arena"),
        ],
        vehicles: vec![
            Vehicle::new("veh-lorry", "Blue lorry")
                .with_seats(9)
                .with_daily_cost(80.0)
                .with_default_driver("st-driver"),
            Vehicle::new("veh-van", "White van")
                .with_seats(7)
                .with_daily_cost(100.0)
                .with_maintenance(day(11)),
        ],
        staff: vec![
            StaffMember::new("st-coach", "Ana"),
            StaffMember::new("st-driver", "Beto"),
            StaffMember::freelance("st-groom", "Caro", 50.0),
        ],
        ..Snapshot::default()
    }
}

/// Engine over the seeded in-memory store, with deterministic ids.
pub fn engine() -> AssignmentEngine<MemoryStore> {
    AssignmentEngine::load(
        MemoryStore::with_snapshot(seed()),
        Box::new(SequentialIds::new("id")),
    )
    .expect("seed snapshot loads")
}
