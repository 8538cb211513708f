use std::collections::{HashMap, HashSet, VecDeque};
use tracing::warn;

use super::layout::SeatLayout;
use crate::records::{Passenger, RecordRef, Seat};

/// Occupant name per seat label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatMap {
    owners: HashMap<String, String>,
}

impl SeatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-seated passengers
    pub fn from_passengers<'a>(passengers: impl IntoIterator<Item = &'a Passenger>) -> Self {
        let mut map = Self::new();
        for p in passengers {
            if let Some(label) = p.seat_number.as_ref().and_then(Seat::label) {
                map.claim(label, &p.name);
            }
        }
        map
    }

    /// Record an owner. A later claim on the same label replaces the earlier one.
    pub fn claim(&mut self, label: &str, owner: &str) {
        self.owners.insert(label.to_string(), owner.to_string());
    }

    pub fn owner(&self, label: &str) -> Option<&str> {
        self.owners.get(label).map(String::as_str)
    }

    pub fn is_taken(&self, label: &str) -> bool {
        self.owners.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Outcome of seating one flight
#[derive(Debug, Clone, Default)]
pub struct SeatAllocation {
    /// The flight's passengers in input order, with final seats
    pub passengers: Vec<Passenger>,
    pub seat_map: SeatMap,
    /// Passengers given a seat in this run
    pub newly_seated: usize,
    pub on_lap: usize,
    /// Passengers left without a seat because the cabin was full
    pub unseated: usize,
}

/// Seat the passengers booked on `flight`.
///
/// Seats already on a passenger record are kept and marked taken. Everyone
/// else is handled in input order: infants with a parent go on the parent's
/// lap, the rest get the first free seat in layout order. When seats run out
/// the remaining passengers stay unseated.
pub fn allocate_seats(passengers: Vec<Passenger>, flight: &RecordRef, layout: &SeatLayout) -> SeatAllocation {
    let mut on_flight: Vec<Passenger> = passengers.into_iter().filter(|p| p.flight == *flight).collect();

    let mut seat_map = SeatMap::from_passengers(&on_flight);
    let mut available: VecDeque<String> = layout.labels().filter(|label| !seat_map.is_taken(label)).collect();

    let known_ids: HashSet<RecordRef> = on_flight.iter().filter_map(|p| p.id.clone()).collect();

    let mut newly_seated = 0;
    let mut on_lap = 0;
    let mut unseated = 0;

    for p in on_flight.iter_mut().filter(|p| p.seat_number.is_none()) {
        if p.travels_on_lap() {
            if let Some(parent) = p.parent.as_ref().filter(|id| !known_ids.contains(*id)) {
                warn!(passenger = %p.name, %parent, "infant's parent is not booked on this flight");
            }
            p.seat_number = Some(Seat::Lap);
            on_lap += 1;
            continue;
        }

        match available.pop_front() {
            Some(label) => {
                seat_map.claim(&label, &p.name);
                p.seat_number = Some(Seat::Label(label));
                newly_seated += 1;
            }
            None => unseated += 1,
        }
    }

    if unseated > 0 {
        warn!(%flight, unseated, capacity = layout.capacity(), "cabin full, passengers left unseated");
    }

    SeatAllocation {
        passengers: on_flight,
        seat_map,
        newly_seated,
        on_lap,
        unseated,
    }
}
