use leptos::prelude::*;

use crate::components::{download_json, LineChart};
use crate::models::{
    export_filename, EnergyTechnology, ExportEnvelope, InvestmentInput, InvestmentResult, Region,
};
use crate::server_fns::{calculate_investment, compare_technologies};

fn default_input() -> InvestmentInput {
    InvestmentInput {
        amount: 25_000.0,
        technology: EnergyTechnology::Solar,
        region: Region::NationalAverage,
        electricity_rate: 0.15,
        annual_consumption_kwh: 12_000.0,
        incentive_pct: 30.0,
        financing_rate: None,
        financing_term_years: None,
    }
}

fn fmt_metric(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.1}{unit}"),
        None => "N/A".to_string(),
    }
}

#[component]
pub fn InvestmentCalculatorPage() -> impl IntoView {
    let (input, set_input) = signal(default_input());
    let (result, set_result) = signal(Option::<InvestmentResult>::None);
    let (comparison, set_comparison) = signal(Option::<Vec<InvestmentResult>>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let calculate = Action::new(move |input: &InvestmentInput| {
        let input = input.clone();
        async move {
            set_error.set(None);
            match calculate_investment(input).await {
                Ok(res) => set_result.set(Some(res)),
                Err(e) => {
                    set_result.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
        }
    });

    let compare = Action::new(move |input: &InvestmentInput| {
        let input = input.clone();
        async move {
            set_error.set(None);
            match compare_technologies(input).await {
                Ok(res) => set_comparison.set(Some(res)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    view! {
        <div class="roi-page">
            <div class="page-header">
                <h1>"Investment ROI Calculator"</h1>
                <p class="subtitle">"Payback, ROI and NPV for the system you're considering"</p>
            </div>

            <div class="roi-layout">
                <div class="calculator-form">
                    {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                    <div class="input-group">
                        <label>"Investment amount ($1,000 - $1,000,000)"</label>
                        <input
                            type="number"
                            min="1000"
                            max="1000000"
                            prop:value=move || input.get().amount.to_string()
                            on:input=move |ev| {
                                if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                    set_input.update(|i| i.amount = v);
                                }
                            }
                        />
                    </div>

                    <div class="input-group">
                        <label>"Technology"</label>
                        <select on:change=move |ev| {
                            if let Some(t) = EnergyTechnology::from_str(&event_target_value(&ev)) {
                                set_input.update(|i| i.technology = t);
                            }
                        }>
                            {EnergyTechnology::all()
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <option
                                            value=t.as_str()
                                            selected=move || input.get().technology == t
                                        >
                                            {t.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="input-group">
                        <label>"Region"</label>
                        <select on:change=move |ev| {
                            if let Some(r) = Region::from_str(&event_target_value(&ev)) {
                                set_input.update(|i| i.region = r);
                            }
                        }>
                            {Region::all()
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <option
                                            value=r.as_str()
                                            selected=move || input.get().region == r
                                        >
                                            {r.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="input-group">
                        <label>"Electricity rate ($/kWh, 0.05 - 0.50)"</label>
                        <input
                            type="number"
                            min="0.05"
                            max="0.50"
                            step="0.01"
                            prop:value=move || input.get().electricity_rate.to_string()
                            on:input=move |ev| {
                                if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                    set_input.update(|i| i.electricity_rate = v);
                                }
                            }
                        />
                    </div>

                    <div class="input-group">
                        <label>"Annual consumption (kWh, 1,000 - 100,000)"</label>
                        <input
                            type="number"
                            min="1000"
                            max="100000"
                            prop:value=move || input.get().annual_consumption_kwh.to_string()
                            on:input=move |ev| {
                                if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                    set_input.update(|i| i.annual_consumption_kwh = v);
                                }
                            }
                        />
                    </div>

                    <div class="input-group">
                        <label>"Incentives (%, 0 - 50)"</label>
                        <input
                            type="number"
                            min="0"
                            max="50"
                            prop:value=move || input.get().incentive_pct.to_string()
                            on:input=move |ev| {
                                if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                    set_input.update(|i| i.incentive_pct = v);
                                }
                            }
                        />
                    </div>

                    <div class="input-group">
                        <label>"Financing rate (optional, used as the NPV discount rate)"</label>
                        <input
                            type="number"
                            min="0"
                            max="0.30"
                            step="0.01"
                            placeholder="0.05"
                            prop:value=move || {
                                input.get().financing_rate.map(|r| r.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                set_input.update(|i| i.financing_rate = raw.parse::<f64>().ok());
                            }
                        />
                    </div>

                    <div class="form-actions">
                        <button
                            class="btn btn-primary"
                            disabled=move || calculate.pending().get()
                            on:click=move |_| { calculate.dispatch(input.get()); }
                        >
                            {move || if calculate.pending().get() { "Projecting..." } else { "Project ROI" }}
                        </button>
                        <button
                            class="btn"
                            disabled=move || compare.pending().get()
                            on:click=move |_| { compare.dispatch(input.get()); }
                        >
                            "Compare Technologies"
                        </button>
                    </div>
                </div>

                {move || {
                    result.get().map(|res| {
                        view! {
                            <InvestmentResults result=res input=input.get_untracked()/>
                        }
                    })
                }}
            </div>

            {move || {
                comparison.get().map(|rows| view! { <ComparisonTable rows=rows/> })
            }}
        </div>
    }
}

#[component]
fn InvestmentResults(result: InvestmentResult, input: InvestmentInput) -> impl IntoView {
    let cumulative: Vec<f64> = result.cashflow.iter().map(|y| y.cumulative).collect();
    let net_line: Vec<f64> = vec![result.net_investment; result.cashflow.len()];

    let export = {
        let result = result.clone();
        move |_| {
            let envelope = ExportEnvelope::new(input.clone(), result.clone());
            if let Ok(json) = envelope.to_json() {
                download_json(&export_filename("investment"), &json);
            }
        }
    };

    view! {
        <div class="results-panel">
            <div class="metric-grid">
                <div class="metric-card">
                    <span class="metric-value">{format!("${:.0}", result.net_investment)}</span>
                    <span class="metric-label">"net investment"</span>
                </div>
                <div class="metric-card">
                    <span class="metric-value">
                        {format!("{:.0} kWh", result.annual_production_kwh)}
                    </span>
                    <span class="metric-label">"annual production"</span>
                </div>
                <div class="metric-card">
                    <span class="metric-value">{format!("${:.0}", result.annual_savings)}</span>
                    <span class="metric-label">"annual savings"</span>
                </div>
                <div class="metric-card">
                    <span class="metric-value">{fmt_metric(result.payback_years, " yrs")}</span>
                    <span class="metric-label">"payback period"</span>
                </div>
                <div class="metric-card">
                    <span class="metric-value">{fmt_metric(result.roi_pct, "%")}</span>
                    <span class="metric-label">
                        {format!("ROI over {} years", result.lifespan_years)}
                    </span>
                </div>
                <div class="metric-card">
                    <span class="metric-value">{format!("${:.0}", result.npv)}</span>
                    <span class="metric-label">"NPV"</span>
                </div>
                <div class="metric-card">
                    <span class="metric-value">
                        {fmt_metric(result.irr_approx.map(|r| r * 100.0), "%")}
                    </span>
                    <span class="metric-label">"IRR (simplified approximation)"</span>
                </div>
            </div>

            <h3>"Cumulative savings vs net investment"</h3>
            <LineChart
                label="Cumulative savings ($) against the net investment line"
                primary=cumulative
                secondary=net_line
            />

            <div class="result-actions">
                <button class="btn" on:click=export>"Export JSON"</button>
            </div>
        </div>
    }
}

#[component]
fn ComparisonTable(rows: Vec<InvestmentResult>) -> impl IntoView {
    view! {
        <div class="comparison-section">
            <h3>"Side-by-side comparison"</h3>
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th>"Technology"</th>
                        <th>"Annual production"</th>
                        <th>"Annual savings"</th>
                        <th>"Payback"</th>
                        <th>"ROI"</th>
                        <th>"NPV"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|r| {
                            view! {
                                <tr>
                                    <td>{r.technology.as_str()}</td>
                                    <td>{format!("{:.0} kWh", r.annual_production_kwh)}</td>
                                    <td>{format!("${:.0}", r.annual_savings)}</td>
                                    <td>{fmt_metric(r.payback_years, " yrs")}</td>
                                    <td>{fmt_metric(r.roi_pct, "%")}</td>
                                    <td>{format!("${:.0}", r.npv)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
