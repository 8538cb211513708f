//! Roster generation: eligibility, crew selection, seating and assembly

pub mod crew;
pub mod document;
pub mod eligibility;
pub mod generator;
pub mod layout;
pub mod plan;
pub mod seating;

pub use crew::*;
pub use document::*;
pub use eligibility::*;
pub use generator::*;
pub use layout::*;
pub use plan::*;
pub use seating::*;
