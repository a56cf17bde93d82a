pub mod config;
pub mod habits;
pub mod session;
pub mod stats;
pub mod target;
