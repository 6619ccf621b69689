use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::models::{CarbonInput, CarbonResult, InvestmentInput, InvestmentResult};

/// Run the carbon footprint estimate for one form snapshot
#[server(input = Json)]
pub async fn calculate_carbon_footprint(
    input: CarbonInput,
) -> Result<CarbonResult, ServerFnError> {
    use crate::services::carbon;

    let mut rng = rand::thread_rng();
    carbon::calculate(&input, &mut rng).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Project ROI for the selected technology
#[server(input = Json)]
pub async fn calculate_investment(
    input: InvestmentInput,
) -> Result<InvestmentResult, ServerFnError> {
    use crate::services::investment;

    investment::calculate(&input).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Re-run the projection for every technology at the same input
#[server(input = Json)]
pub async fn compare_technologies(
    input: InvestmentInput,
) -> Result<Vec<InvestmentResult>, ServerFnError> {
    use crate::services::investment;

    investment::compare(&input).map_err(|e| ServerFnError::new(e.to_string()))
}
