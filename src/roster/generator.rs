use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use super::crew::{select_cabin_crew, select_pilots};
use super::document::Roster;
use super::eligibility::{eligible_attendants, eligible_pilots};
use super::seating::allocate_seats;
use crate::config::SeatingConfig;
use crate::gateway::RecordSource;
use crate::records::{find_flight, FlightSummary};
use crate::store::{RosterStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("flight {0} not found")]
    FlightNotFound(String),
    #[error("failed to store roster: {0}")]
    Store(#[from] StoreError),
}

/// Builds and stores rosters from the record services.
///
/// Every call starts from scratch; the only state shared between calls is
/// what sits in the store.
pub struct RosterGenerator<'a, S, R> {
    source: &'a S,
    store: &'a RosterStore,
    seating: &'a SeatingConfig,
    rng: R,
}

impl<'a, S: RecordSource, R: Rng> RosterGenerator<'a, S, R> {
    pub fn new(source: &'a S, store: &'a RosterStore, seating: &'a SeatingConfig, rng: R) -> Self {
        Self {
            source,
            store,
            seating,
            rng,
        }
    }

    /// Generate the roster for a flight number and upsert it.
    ///
    /// An unknown flight leaves the store untouched.
    pub fn generate(&mut self, flight_id: &str) -> Result<Roster, GenerateError> {
        let flight = self.lookup(flight_id)?;
        let roster = self.allocate(&flight);
        self.store.upsert(&roster)?;
        Ok(roster)
    }

    fn lookup(&self, flight_id: &str) -> Result<FlightSummary, GenerateError> {
        let fetched = self.source.flights();
        let lookup_failed = fetched.is_failed();
        let flights = fetched.into_records();

        match find_flight(&flights, flight_id) {
            Some(flight) => Ok(flight.clone()),
            None => {
                if lookup_failed {
                    warn!(flight_id, "flight list unavailable, reporting flight as not found");
                }
                Err(GenerateError::FlightNotFound(flight_id.to_string()))
            }
        }
    }

    fn allocate(&mut self, flight: &FlightSummary) -> Roster {
        let aircraft = &flight.plane_type;
        let mut roster = Roster::new(flight.flight_number.clone());
        roster.aircraft = Some(aircraft.to_string());

        let pilots = eligible_pilots(self.source.pilots().into_records(), aircraft, flight.distance);
        roster.pilots = select_pilots(pilots);

        let attendants = eligible_attendants(self.source.cabin_crew().into_records(), aircraft);
        let cabin = select_cabin_crew(attendants, &mut self.rng);
        roster.cabin_crew = cabin.crew;
        roster.menu = cabin.menu;

        let layout = self.seating.layout_for(&aircraft.key());
        let seating = allocate_seats(self.source.passengers().into_records(), &flight.passenger_ref(), layout);
        roster.passengers = seating.passengers;

        roster.generated_at = Utc::now();

        info!(
            flight_id = %roster.flight_id,
            %aircraft,
            pilots = roster.pilots.len(),
            cabin_crew = roster.cabin_crew.len(),
            menu = roster.menu.len(),
            seated = seating.newly_seated,
            lap = seating.on_lap,
            unseated = seating.unseated,
            "roster generated"
        );

        roster
    }
}
