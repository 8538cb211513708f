pub mod cli;
pub mod config;
pub mod gateway;
pub mod records;
pub mod roster;
pub mod store;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use gateway::{HttpGateway, RecordSource};
pub use roster::{Roster, RosterGenerator};
pub use store::RosterStore;
