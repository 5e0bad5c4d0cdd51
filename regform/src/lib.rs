pub mod application;
pub mod configuration;
pub mod telemetry;
pub mod terminal;
