mod assistant;
mod auth;
mod calculators;
mod telemetry;

pub use assistant::*;
pub use auth::*;
pub use calculators::*;
pub use telemetry::*;
