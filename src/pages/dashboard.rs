use leptos::prelude::*;

use crate::components::{AuthGuard, LineChart};
use crate::models::SeriesRange;
use crate::server_fns::fetch_energy_series;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (range, set_range) = signal(SeriesRange::Week);
    let series = Resource::new(move || range.get(), fetch_energy_series);

    view! {
        <AuthGuard>
            <div class="dashboard-page">
                <div class="page-header">
                    <h1>"Dashboard"</h1>
                    <p class="subtitle">"Demo telemetry - swap the provider for real meters"</p>
                </div>

                <div class="range-selector">
                    {SeriesRange::all()
                        .into_iter()
                        .map(|r| {
                            view! {
                                <button
                                    class="mode-btn"
                                    class:active=move || range.get() == r
                                    on:click=move |_| set_range.set(r)
                                >
                                    {r.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Suspense fallback=|| view! { <div class="loading">"Loading series..."</div> }>
                    {move || {
                        series.get().map(|result| match result {
                            Ok(points) => {
                                let total: f64 = points.iter().map(|p| p.kwh).sum();
                                let peak = points
                                    .iter()
                                    .map(|p| p.kwh)
                                    .fold(0.0_f64, f64::max);
                                let values: Vec<f64> = points.iter().map(|p| p.kwh).collect();
                                view! {
                                    <div class="dashboard-content">
                                    <div class="dashboard-cards">
                                        <div class="stat-card">
                                            <span class="stat-value">{format!("{total:.0} kWh")}</span>
                                            <span class="stat-label">"generated this period"</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-value">{format!("{peak:.1} kWh")}</span>
                                            <span class="stat-label">"peak sample"</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-value">{points.len()}</span>
                                            <span class="stat-label">"samples"</span>
                                        </div>
                                    </div>
                                    <LineChart
                                        label=format!("Generation ({})", range.get_untracked().as_str())
                                        primary=values
                                    />
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <div class="error-message">{e.to_string()}</div> }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </div>
        </AuthGuard>
    }
}
