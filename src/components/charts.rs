use leptos::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 140.0;
const PAD: f64 = 10.0;

fn polyline_points(values: &[f64], max: f64) -> String {
    if values.is_empty() || max <= 0.0 {
        return String::new();
    }
    let step = (WIDTH - 2.0 * PAD) / (values.len().max(2) - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD + step * i as f64;
            let y = HEIGHT - PAD - (v / max) * (HEIGHT - 2.0 * PAD);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain SVG line chart used as the chart placeholder throughout the site.
/// Optionally draws a second (target/reference) line in a muted colour.
#[component]
pub fn LineChart(
    #[prop(into)] label: String,
    primary: Vec<f64>,
    #[prop(optional, into)] secondary: Option<Vec<f64>>,
) -> impl IntoView {
    let max = primary
        .iter()
        .chain(secondary.iter().flatten())
        .cloned()
        .fold(0.0_f64, f64::max);

    let primary_points = polyline_points(&primary, max);
    let secondary_points = secondary.as_deref().map(|s| polyline_points(s, max));

    view! {
        <figure class="line-chart">
            <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") preserveAspectRatio="none">
                {secondary_points.map(|points| view! {
                    <polyline class="chart-line secondary" points=points fill="none"/>
                })}
                <polyline class="chart-line primary" points=primary_points fill="none"/>
            </svg>
            <figcaption>{label}</figcaption>
        </figure>
    }
}

/// Horizontal percentage bars for the emissions breakdown
#[component]
pub fn BreakdownBars(shares: Vec<(String, f64)>) -> impl IntoView {
    view! {
        <div class="breakdown-bars">
            {shares
                .into_iter()
                .map(|(label, percentage)| {
                    view! {
                        <div class="breakdown-row">
                            <span class="breakdown-label">{label}</span>
                            <div class="breakdown-track">
                                <div
                                    class="breakdown-fill"
                                    style=format!("width: {:.1}%;", percentage)
                                ></div>
                            </div>
                            <span class="breakdown-pct">{format!("{:.1}%", percentage)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
