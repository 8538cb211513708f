pub mod client;
pub mod fetched;

pub use client::*;
pub use fetched::*;
