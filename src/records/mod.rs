pub mod crew;
pub mod flight;
pub mod passenger;
pub mod types;

pub use crew::*;
pub use flight::*;
pub use passenger::*;
pub use types::*;
