use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::models::{DataPoint, SeriesRange};

/// Fetch an ordered generation series for the dashboard charts
#[server(input = Json)]
pub async fn fetch_energy_series(range: SeriesRange) -> Result<Vec<DataPoint>, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use crate::state::AppState;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(state.telemetry.fetch_series(range))
}
