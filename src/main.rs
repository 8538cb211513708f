use anyhow::{bail, Context, Result};
use serde::Serialize;
use skycrew_roster::{
    cli::{Cli, Commands},
    config::Config,
    gateway::HttpGateway,
    roster::{render_seat_plan, ErrorDocument, GenerateError, Roster, RosterGenerator},
    store::RosterStore,
};
use std::fs;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.store.path = Some(db);
    }
    if let Some(base_url) = cli.base_url {
        config.gateway.base_url = base_url;
        config.validate()?;
    }

    let db_path = config.store.resolve_path()?;
    let store = RosterStore::open(&db_path)
        .with_context(|| format!("Failed to open roster database {:?}", db_path))?;

    match cli.command {
        Commands::Generate { flight_id } => {
            let start = Instant::now();
            let gateway = HttpGateway::new(config.gateway.clone())?;
            let mut generator =
                RosterGenerator::new(&gateway, &store, &config.seating, rand::thread_rng());

            match generator.generate(&flight_id) {
                Ok(roster) => {
                    print_json(&roster)?;
                    info!(
                        flight_id = %roster.flight_id,
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "done"
                    );
                }
                Err(GenerateError::FlightNotFound(_)) => {
                    print_json(&ErrorDocument::flight_not_found())?;
                    bail!("Flight {} not found", flight_id);
                }
                Err(err) => return Err(err).context("Roster generation failed"),
            }
        }

        Commands::Show { flight_id } => {
            let roster = stored_roster(&store, &flight_id)?;
            print_json(&roster)?;
        }

        Commands::List => {
            let rosters = store.list()?;
            if rosters.is_empty() {
                println!("No rosters stored in {:?}", db_path);
            } else {
                println!(
                    "{:<10} {:<26} {:>6} {:>6} {:>10} {:>6} {:>4}",
                    "FLIGHT", "GENERATED", "PILOTS", "CREW", "PASSENGERS", "SEATED", "LAP"
                );
                for r in rosters {
                    println!(
                        "{:<10} {:<26} {:>6} {:>6} {:>10} {:>6} {:>4}",
                        r.flight_id,
                        r.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                        r.pilots,
                        r.cabin_crew,
                        r.passengers,
                        r.seated,
                        r.on_lap
                    );
                }
            }
        }

        Commands::Export { flight_id, output } => {
            let roster = stored_roster(&store, &flight_id)?;
            let json = serde_json::to_string_pretty(&roster)?;
            fs::write(&output, json)
                .with_context(|| format!("Failed to write {:?}", output))?;
            println!("Roster for {} exported to {:?}", flight_id, output);
        }

        Commands::Seats { flight_id } => {
            let roster = stored_roster(&store, &flight_id)?;
            let layout = config
                .seating
                .layout_for(roster.aircraft.as_deref().unwrap_or_default());
            print!("{}", render_seat_plan(&roster, layout));
        }

        Commands::Delete { flight_id } => {
            if store.delete(&flight_id)? {
                println!("Deleted roster for {}", flight_id);
            } else {
                println!("No roster stored for {}", flight_id);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load a stored roster, printing the error document when there is none
fn stored_roster(store: &RosterStore, flight_id: &str) -> Result<Roster> {
    match store.get(flight_id)? {
        Some(roster) => Ok(roster),
        None => {
            print_json(&ErrorDocument::roster_not_found())?;
            bail!("No roster stored for {}", flight_id);
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
