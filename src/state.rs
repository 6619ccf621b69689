use std::sync::Arc;

use crate::services::assistant::Assistant;
use crate::services::telemetry::DataProvider;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub telemetry: Arc<dyn DataProvider + Send + Sync>,
}
