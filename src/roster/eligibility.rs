use crate::records::{Attendant, Pilot, RecordRef};

/// Pilot may fly this aircraft type over this distance
pub fn pilot_is_eligible(pilot: &Pilot, aircraft: &RecordRef, distance: f64) -> bool {
    pilot.allowed_vehicle == *aircraft && pilot.allowed_range >= distance
}

/// Attendant is certified for this aircraft type
pub fn attendant_is_eligible(attendant: &Attendant, aircraft: &RecordRef) -> bool {
    attendant.allowed_vehicles.contains(aircraft)
}

/// Keep the pilots eligible for a flight, in input order
pub fn eligible_pilots(pilots: Vec<Pilot>, aircraft: &RecordRef, distance: f64) -> Vec<Pilot> {
    pilots
        .into_iter()
        .filter(|p| pilot_is_eligible(p, aircraft, distance))
        .collect()
}

/// Keep the attendants eligible for a flight, in input order
pub fn eligible_attendants(attendants: Vec<Attendant>, aircraft: &RecordRef) -> Vec<Attendant> {
    attendants
        .into_iter()
        .filter(|a| attendant_is_eligible(a, aircraft))
        .collect()
}
