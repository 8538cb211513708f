use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{Attendant, Passenger, Pilot, Seat};

/// Message carried by the error document for an unknown flight
pub const FLIGHT_NOT_FOUND: &str = "Flight not found";
pub const ROSTER_NOT_FOUND: &str = "Roster not found";

/// Crew, menu and seating for one flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub flight_id: String,
    pub generated_at: DateTime<Utc>,
    /// Aircraft type of the flight, used to lay out the seat plan
    #[serde(default)]
    pub aircraft: Option<String>,
    pub pilots: Vec<Pilot>,
    pub cabin_crew: Vec<Attendant>,
    pub passengers: Vec<Passenger>,
    pub menu: Vec<String>,
}

impl Roster {
    pub fn new(flight_id: impl Into<String>) -> Self {
        Self {
            flight_id: flight_id.into(),
            generated_at: Utc::now(),
            aircraft: None,
            pilots: Vec::new(),
            cabin_crew: Vec::new(),
            passengers: Vec::new(),
            menu: Vec::new(),
        }
    }

    /// Passengers sitting in a physical seat
    pub fn seated_count(&self) -> usize {
        self.passengers
            .iter()
            .filter(|p| matches!(p.seat_number, Some(Seat::Label(_))))
            .count()
    }

    pub fn lap_count(&self) -> usize {
        self.passengers
            .iter()
            .filter(|p| matches!(p.seat_number, Some(Seat::Lap)))
            .count()
    }

    pub fn unseated_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.seat_number.is_none()).count()
    }
}

/// Document returned in place of a roster when generation cannot run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub error: String,
}

impl ErrorDocument {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    pub fn flight_not_found() -> Self {
        Self::new(FLIGHT_NOT_FOUND)
    }

    /// No roster has been stored for the flight yet
    pub fn roster_not_found() -> Self {
        Self::new(ROSTER_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_document_shape() {
        let json = serde_json::to_value(ErrorDocument::flight_not_found()).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Flight not found"}));
    }

    #[test]
    fn test_roster_document_shape() {
        let roster = Roster::new("SC1001");
        let json = serde_json::to_value(&roster).unwrap();

        assert_eq!(json["flight_id"], "SC1001");
        for key in ["generated_at", "pilots", "cabin_crew", "passengers", "menu"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert!(json.get("error").is_none());

        let back: Roster = serde_json::from_value(json).unwrap();
        assert_eq!(back, roster);
    }
}
