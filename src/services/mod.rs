pub mod assistant;
pub mod carbon;
pub mod investment;
pub mod telemetry;
