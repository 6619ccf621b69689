mod carbon;
mod chat;
mod export;
mod investment;
mod telemetry;

pub use carbon::*;
pub use chat::*;
pub use export::*;
pub use investment::*;
pub use telemetry::*;
