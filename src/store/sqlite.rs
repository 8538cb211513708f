use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

use crate::roster::Roster;

const CREATE_ROSTERS: &str = "CREATE TABLE IF NOT EXISTS rosters (
    flight_id TEXT PRIMARY KEY NOT NULL,
    generated_at TEXT NOT NULL,
    roster_data TEXT NOT NULL
)";

const UPSERT_ROSTER: &str = "INSERT INTO rosters (flight_id, generated_at, roster_data)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(flight_id) DO UPDATE SET
        generated_at = excluded.generated_at,
        roster_data = excluded.roster_data";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("roster document error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bad timestamp stored for {flight_id}: {source}")]
    Timestamp {
        flight_id: String,
        source: chrono::ParseError,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whether an upsert inserted a new document or replaced one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Replaced,
}

/// One line of the stored roster listing
#[derive(Debug, Clone, PartialEq)]
pub struct RosterSummary {
    pub flight_id: String,
    pub generated_at: DateTime<Utc>,
    pub pilots: usize,
    pub cabin_crew: usize,
    pub passengers: usize,
    pub seated: usize,
    pub on_lap: usize,
}

/// Roster documents keyed by flight id, one per flight
pub struct RosterStore {
    conn: Connection,
}

impl RosterStore {
    pub fn open(db_path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute(CREATE_ROSTERS, [])?;
        Ok(Self { conn })
    }

    /// Insert the roster, or replace the stored one for the same flight
    pub fn upsert(&self, roster: &Roster) -> StoreResult<UpsertOutcome> {
        let data = serde_json::to_string(roster)?;

        let tx = self.conn.unchecked_transaction()?;
        let existed = tx
            .query_row(
                "SELECT 1 FROM rosters WHERE flight_id = ?1",
                [&roster.flight_id],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        tx.execute(
            UPSERT_ROSTER,
            params![roster.flight_id, roster.generated_at.to_rfc3339(), data],
        )?;
        tx.commit()?;

        let outcome = if existed {
            UpsertOutcome::Replaced
        } else {
            UpsertOutcome::Created
        };
        info!(flight_id = %roster.flight_id, ?outcome, "roster stored");
        Ok(outcome)
    }

    pub fn get(&self, flight_id: &str) -> StoreResult<Option<Roster>> {
        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT roster_data FROM rosters WHERE flight_id = ?1",
                [flight_id],
                |row| row.get(0),
            )
            .optional()?;

        match data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    /// All stored rosters, ordered by flight id
    pub fn list(&self) -> StoreResult<Vec<RosterSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT roster_data FROM rosters ORDER BY flight_id")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut summaries = Vec::new();
        for data in rows {
            let roster: Roster = serde_json::from_str(&data?)?;
            summaries.push(RosterSummary {
                pilots: roster.pilots.len(),
                cabin_crew: roster.cabin_crew.len(),
                passengers: roster.passengers.len(),
                seated: roster.seated_count(),
                on_lap: roster.lap_count(),
                generated_at: roster.generated_at,
                flight_id: roster.flight_id,
            });
        }

        Ok(summaries)
    }

    /// Generation time recorded in the index column
    pub fn generated_at(&self, flight_id: &str) -> StoreResult<Option<DateTime<Utc>>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT generated_at FROM rosters WHERE flight_id = ?1",
                [flight_id],
                |row| row.get(0),
            )
            .optional()?;

        raw.map(|raw| {
            DateTime::parse_from_rfc3339(&raw)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|source| StoreError::Timestamp {
                    flight_id: flight_id.to_string(),
                    source,
                })
        })
        .transpose()
    }

    /// Remove a roster. Returns whether one was stored.
    pub fn delete(&self, flight_id: &str) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM rosters WHERE flight_id = ?1", [flight_id])?;
        debug!(flight_id, removed, "roster delete");
        Ok(removed > 0)
    }

    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM rosters", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
