use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{deserialize_optional_seat, RecordRef, Seat};

/// Passengers at or below this age may travel on a parent's lap
pub const INFANT_MAX_AGE: u32 = 2;

/// Passenger record from the passengers service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(default, alias = "passenger_id")]
    pub id: Option<RecordRef>,
    /// The flight this passenger is booked on
    #[serde(alias = "flight_id")]
    pub flight: RecordRef,
    pub name: String,
    pub age: u32,
    /// Another passenger on the same flight
    #[serde(default, alias = "parent_passenger")]
    pub parent: Option<RecordRef>,
    #[serde(default, deserialize_with = "deserialize_optional_seat")]
    pub seat_number: Option<Seat>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Passenger {
    pub fn is_infant(&self) -> bool {
        self.age <= INFANT_MAX_AGE
    }

    /// Infant with a recorded parent, seated on the parent's lap
    pub fn travels_on_lap(&self) -> bool {
        self.parent.is_some() && self.is_infant()
    }
}
