mod auth_guard;
mod charts;
mod chat_widget;
mod download;
mod nav;

pub use auth_guard::AuthGuard;
pub use charts::{BreakdownBars, LineChart};
pub use chat_widget::ChatWidget;
pub use download::download_json;
pub use nav::Nav;
