use serde::{Deserialize, Serialize};

use super::types::RecordRef;

/// Flight as published by the flight-info service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSummary {
    pub flight_number: String,
    /// Aircraft type, either its name or the plane-type record key
    #[serde(alias = "vehicle_type")]
    pub plane_type: RecordRef,
    #[serde(alias = "distance_km")]
    pub distance: f64,
    /// Key passengers use to point at this flight
    #[serde(default)]
    pub id: Option<RecordRef>,
}

impl FlightSummary {
    /// Reference passengers carry for this flight.
    ///
    /// Falls back to the flight number when the service does not expose a
    /// separate record key.
    pub fn passenger_ref(&self) -> RecordRef {
        self.id
            .clone()
            .unwrap_or_else(|| RecordRef::Text(self.flight_number.clone()))
    }
}

/// Find a flight by its public flight number
pub fn find_flight<'a>(flights: &'a [FlightSummary], flight_number: &str) -> Option<&'a FlightSummary> {
    flights.iter().find(|f| f.flight_number == flight_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flight() {
        let json = r#"{"flight_number": "SC1001", "plane_type": "Boeing 737", "distance": 1500, "id": 3}"#;
        let flight: FlightSummary = serde_json::from_str(json).unwrap();
        assert_eq!(flight.flight_number, "SC1001");
        assert_eq!(flight.plane_type, RecordRef::from("Boeing 737"));
        assert_eq!(flight.distance, 1500.0);
        assert_eq!(flight.passenger_ref(), RecordRef::Number(3));
    }

    #[test]
    fn test_passenger_ref_falls_back_to_flight_number() {
        let json = r#"{"flight_number": "SC2002", "plane_type": 4, "distance_km": 800}"#;
        let flight: FlightSummary = serde_json::from_str(json).unwrap();
        assert_eq!(flight.distance, 800.0);
        assert_eq!(flight.passenger_ref(), RecordRef::from("SC2002"));
    }

    #[test]
    fn test_parse_flight_service_record() {
        let json = r#"{
            "flight_number": "SC1001",
            "departure_time": "2026-10-18T09:30:00Z",
            "duration_minutes": 150,
            "distance_km": 1500,
            "source": "IST",
            "destination": "BER",
            "vehicle_type": 3,
            "shared_info": null
        }"#;
        let flight: FlightSummary = serde_json::from_str(json).unwrap();
        assert_eq!(flight.plane_type, RecordRef::Number(3));
        assert_eq!(flight.distance, 1500.0);
        assert_eq!(flight.passenger_ref(), RecordRef::from("SC1001"));
    }

    #[test]
    fn test_find_flight() {
        let flights: Vec<FlightSummary> = serde_json::from_str(
            r#"[
                {"flight_number": "SC1001", "plane_type": "Boeing 737", "distance": 1500},
                {"flight_number": "SC1002", "plane_type": "Airbus A320", "distance": 900}
            ]"#,
        )
        .unwrap();

        assert_eq!(find_flight(&flights, "SC1002").unwrap().distance, 900.0);
        assert!(find_flight(&flights, "SC9999").is_none());
    }
}
