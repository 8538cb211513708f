use std::collections::HashSet;
use std::fmt::Write;

use super::document::Roster;
use super::layout::SeatLayout;
use super::seating::SeatMap;
use crate::records::Seat;

const CELL_WIDTH: usize = 14;
const FREE: &str = ".";

/// Render the cabin as text, one line per row, followed by lap infants,
/// passengers without a seat and seats that fall outside the layout.
pub fn render_seat_plan(roster: &Roster, layout: &SeatLayout) -> String {
    let seat_map = SeatMap::from_passengers(&roster.passengers);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Seat plan for {} ({}, {} seats)",
        roster.flight_id,
        roster.aircraft.as_deref().unwrap_or("unknown aircraft"),
        layout.capacity()
    );

    let mut header = format!("{:>4} ", "");
    for col in layout.columns.chars() {
        let _ = write!(header, " {:<width$}", col, width = CELL_WIDTH);
    }
    let _ = writeln!(out, "{}", header.trim_end());

    for row in 1..=layout.rows {
        let mut line = format!("{:>4} ", row);
        for label in layout.row_labels(row) {
            let cell = seat_map
                .owner(&label)
                .map(|name| truncate(name, CELL_WIDTH))
                .unwrap_or_else(|| FREE.to_string());
            let _ = write!(line, " {:<width$}", cell, width = CELL_WIDTH);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let lap: Vec<&str> = roster
        .passengers
        .iter()
        .filter(|p| matches!(p.seat_number, Some(Seat::Lap)))
        .map(|p| p.name.as_str())
        .collect();
    if !lap.is_empty() {
        let _ = writeln!(out, "\nOn lap: {}", lap.join(", "));
    }

    let unseated: Vec<&str> = roster
        .passengers
        .iter()
        .filter(|p| p.seat_number.is_none())
        .map(|p| p.name.as_str())
        .collect();
    if !unseated.is_empty() {
        let _ = writeln!(out, "\nNo seat: {}", unseated.join(", "));
    }

    let in_layout: HashSet<String> = layout.labels().collect();
    let outside: Vec<String> = roster
        .passengers
        .iter()
        .filter_map(|p| p.seat_number.as_ref().and_then(Seat::label).map(|label| (label, &p.name)))
        .filter(|(label, _)| !in_layout.contains(*label))
        .map(|(label, name)| format!("{} ({})", name, label))
        .collect();
    if !outside.is_empty() {
        let _ = writeln!(out, "\nOutside layout: {}", outside.join(", "));
    }

    out
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width - 1).collect();
        short.push('~');
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Passenger, RecordRef};
    use serde_json::Map;

    fn passenger(name: &str, seat: Option<Seat>) -> Passenger {
        Passenger {
            id: None,
            flight: RecordRef::Number(1),
            name: name.to_string(),
            age: 30,
            parent: None,
            seat_number: seat,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_render_small_cabin() {
        let mut roster = Roster::new("SC1001");
        roster.aircraft = Some("Boeing 737".to_string());
        roster.passengers = vec![
            passenger("Alice", Some(Seat::Label("1A".into()))),
            passenger("Baby", Some(Seat::Lap)),
            passenger("Late", None),
            passenger("Aisle", Some(Seat::Label("9Z".into()))),
        ];

        let plan = render_seat_plan(&roster, &SeatLayout::new(2, "AB"));
        let lines: Vec<&str> = plan.lines().collect();

        assert_eq!(lines[0], "Seat plan for SC1001 (Boeing 737, 4 seats)");
        assert!(lines[2].starts_with("   1  Alice"));
        assert!(lines[2].ends_with('.'));
        assert_eq!(lines[3].matches('.').count(), 2);
        assert!(plan.contains("On lap: Baby"));
        assert!(plan.contains("No seat: Late"));
        assert!(plan.contains("Outside layout: Aisle (9Z)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 14), "Short");
        assert_eq!(truncate("Bartholomew Featherstonehaugh", 14), "Bartholomew F~");
    }
}
