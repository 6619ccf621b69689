use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Verdant"</h1>
                <p class="subtitle">"Renewable Energy Intelligence for Homes and Businesses"</p>
                <p class="description">
                    "Estimate your carbon footprint, project the return on a solar, wind or "
                    "battery investment, and see where the biggest reductions are hiding."
                </p>
                <div class="cta-buttons">
                    <A href="/carbon" attr:class="btn btn-primary">"Estimate My Footprint"</A>
                    <A href="/roi" attr:class="btn btn-secondary">"Project My ROI"</A>
                </div>
            </section>

            <section class="features">
                <div class="feature">
                    <h3>"Carbon Footprint Estimator"</h3>
                    <p>"A full household, transportation and lifestyle breakdown with your top five reduction actions"</p>
                </div>
                <div class="feature">
                    <h3>"Investment ROI Optimizer"</h3>
                    <p>"Payback, ROI and NPV for solar, wind, battery and hybrid systems, side by side"</p>
                </div>
                <div class="feature">
                    <h3>"Live Dashboard"</h3>
                    <p>"Generation and consumption series at a glance, exportable as JSON"</p>
                </div>
            </section>

            <section class="stats-band">
                <div class="stat">
                    <span class="stat-value">"38%"</span>
                    <span class="stat-label">"average footprint reduction in year one"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">"7.4 yrs"</span>
                    <span class="stat-label">"median solar payback across our customers"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">"12k+"</span>
                    <span class="stat-label">"projections run this quarter"</span>
                </div>
            </section>
        </div>
    }
}
