use leptos::prelude::*;

use crate::components::{download_json, BreakdownBars, LineChart};
use crate::models::{
    export_filename, CarbonInput, CarbonResult, DietType, ElectricitySource, ExportEnvelope,
    FlightEntry, ShoppingHabit, VehicleType,
};
use crate::server_fns::calculate_carbon_footprint;

const STEPS: [&str; 3] = ["Household", "Transportation", "Lifestyle"];

#[component]
pub fn CarbonCalculatorPage() -> impl IntoView {
    let (step, set_step) = signal(0usize);
    let (input, set_input) = signal(CarbonInput::default());
    let (results, set_results) = signal(Option::<CarbonResult>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let calculate = Action::new(move |input: &CarbonInput| {
        let input = input.clone();
        async move {
            set_error.set(None);
            match calculate_carbon_footprint(input).await {
                Ok(res) => set_results.set(Some(res)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    let reset = move |_| {
        set_results.set(None);
        set_error.set(None);
        set_input.set(CarbonInput::default());
        set_step.set(0);
    };

    view! {
        <div class="carbon-page">
            <div class="page-header">
                <h1>"Carbon Footprint Calculator"</h1>
                <p class="subtitle">"Three quick sections, then your annual estimate with the biggest wins"</p>
            </div>

            {move || match results.get() {
                None => view! {
                    <div class="calculator-form">
                        <div class="step-indicator">
                            {STEPS
                                .iter()
                                .enumerate()
                                .map(|(i, name)| {
                                    view! {
                                        <button
                                            class="step-pill"
                                            class:active=move || step.get() == i
                                            on:click=move |_| set_step.set(i)
                                        >
                                            {format!("{}. {name}", i + 1)}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                        {move || match step.get() {
                            0 => view! { <HouseholdStep input=input set_input=set_input/> }.into_any(),
                            1 => view! { <TransportationStep input=input set_input=set_input/> }.into_any(),
                            _ => view! { <LifestyleStep input=input set_input=set_input/> }.into_any(),
                        }}

                        <div class="step-nav">
                            <button
                                class="btn"
                                disabled=move || step.get() == 0
                                on:click=move |_| set_step.update(|s| *s = s.saturating_sub(1))
                            >
                                "Back"
                            </button>
                            {move || {
                                if step.get() < STEPS.len() - 1 {
                                    view! {
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| set_step.update(|s| *s += 1)
                                        >
                                            "Next"
                                        </button>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <button
                                            class="btn btn-primary"
                                            disabled=move || calculate.pending().get()
                                            on:click=move |_| { calculate.dispatch(input.get()); }
                                        >
                                            {move || {
                                                if calculate.pending().get() {
                                                    "Calculating..."
                                                } else {
                                                    "Calculate Footprint"
                                                }
                                            }}
                                        </button>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                }
                    .into_any(),
                Some(res) => view! {
                    <CarbonResults
                        result=res
                        input=input.get_untracked()
                        on_reset=reset
                    />
                }
                    .into_any(),
            }}
        </div>
    }
}

/// Numeric field bound to one `f64` on the input record
#[component]
fn NumberField(
    #[prop(into)] label: String,
    value: f64,
    #[prop(into)] on_change: Callback<f64>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <label>{label}</label>
            <input
                type="number"
                min="0"
                prop:value=value.to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                        on_change.run(v);
                    }
                }
            />
            {hint.map(|h| view! { <span class="input-hint">{h}</span> })}
        </div>
    }
}

#[component]
fn HouseholdStep(
    input: ReadSignal<CarbonInput>,
    set_input: WriteSignal<CarbonInput>,
) -> impl IntoView {
    view! {
        <div class="form-step">
            <NumberField
                label="Electricity (kWh per month)"
                value=input.get_untracked().electricity_kwh
                on_change=Callback::new(move |v| set_input.update(|i| i.electricity_kwh = v))
            />
            <div class="input-group">
                <label>"Electricity source"</label>
                <select on:change=move |ev| {
                    if let Some(source) = ElectricitySource::from_str(&event_target_value(&ev)) {
                        set_input.update(|i| i.electricity_source = source);
                    }
                }>
                    {ElectricitySource::all()
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option
                                    value=s.as_str()
                                    selected=move || input.get().electricity_source == s
                                >
                                    {s.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <NumberField
                label="Natural gas (therms per month)"
                value=input.get_untracked().natural_gas_therms
                on_change=Callback::new(move |v| set_input.update(|i| i.natural_gas_therms = v))
            />
            <NumberField
                label="Water (gallons per day)"
                value=input.get_untracked().water_gallons_per_day
                on_change=Callback::new(move |v| set_input.update(|i| i.water_gallons_per_day = v))
            />
        </div>
    }
}

#[component]
fn TransportationStep(
    input: ReadSignal<CarbonInput>,
    set_input: WriteSignal<CarbonInput>,
) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="input-group">
                <label>"Vehicle type"</label>
                <select on:change=move |ev| {
                    if let Some(vehicle) = VehicleType::from_str(&event_target_value(&ev)) {
                        set_input.update(|i| i.vehicle = vehicle);
                    }
                }>
                    {VehicleType::all()
                        .into_iter()
                        .map(|v| {
                            view! {
                                <option value=v.as_str() selected=move || input.get().vehicle == v>
                                    {v.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <NumberField
                label="Car miles per week"
                value=input.get_untracked().car_miles_per_week
                on_change=Callback::new(move |v| set_input.update(|i| i.car_miles_per_week = v))
            />
            <NumberField
                label="Public transit miles per week"
                value=input.get_untracked().transit_miles_per_week
                on_change=Callback::new(move |v| set_input.update(|i| i.transit_miles_per_week = v))
            />

            <div class="flights-section">
                <label>"Flights"</label>
                {move || {
                    input
                        .get()
                        .flights
                        .into_iter()
                        .enumerate()
                        .map(|(idx, flight)| {
                            view! {
                                <div class="flight-row">
                                    <input
                                        type="number"
                                        min="0"
                                        placeholder="distance (miles)"
                                        prop:value=flight.distance_miles.to_string()
                                        on:input=move |ev| {
                                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                set_input.update(|i| {
                                                    if let Some(f) = i.flights.get_mut(idx) {
                                                        f.distance_miles = v;
                                                    }
                                                });
                                            }
                                        }
                                    />
                                    <input
                                        type="number"
                                        min="0"
                                        placeholder="trips per year"
                                        prop:value=flight.trips_per_year.to_string()
                                        on:input=move |ev| {
                                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                set_input.update(|i| {
                                                    if let Some(f) = i.flights.get_mut(idx) {
                                                        f.trips_per_year = v;
                                                    }
                                                });
                                            }
                                        }
                                    />
                                    <button
                                        class="btn btn-small"
                                        on:click=move |_| {
                                            set_input.update(|i| {
                                                i.flights.remove(idx);
                                            });
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="btn"
                    on:click=move |_| {
                        set_input.update(|i| {
                            i.flights.push(FlightEntry {
                                distance_miles: 0.0,
                                trips_per_year: 1.0,
                            })
                        });
                    }
                >
                    "+ Add flight"
                </button>
            </div>
        </div>
    }
}

#[component]
fn LifestyleStep(
    input: ReadSignal<CarbonInput>,
    set_input: WriteSignal<CarbonInput>,
) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="input-group">
                <label>"Diet"</label>
                <select on:change=move |ev| {
                    if let Some(diet) = DietType::from_str(&event_target_value(&ev)) {
                        set_input.update(|i| i.diet = diet);
                    }
                }>
                    {DietType::all()
                        .into_iter()
                        .map(|d| {
                            view! {
                                <option value=d.as_str() selected=move || input.get().diet == d>
                                    {d.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="input-group">
                <label>"Food waste"</label>
                <select on:change=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                        set_input.update(|i| i.food_waste_pct = v);
                    }
                }>
                    {(0..=10)
                        .map(|n| {
                            let pct = (n * 5) as f64;
                            view! {
                                <option
                                    value=pct.to_string()
                                    selected=move || input.get().food_waste_pct == pct
                                >
                                    {format!("{pct}%")}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="input-group">
                <label>"Shopping habits"</label>
                <select on:change=move |ev| {
                    if let Some(habit) = ShoppingHabit::from_str(&event_target_value(&ev)) {
                        set_input.update(|i| i.shopping = habit);
                    }
                }>
                    {ShoppingHabit::all()
                        .into_iter()
                        .map(|h| {
                            view! {
                                <option value=h.as_str() selected=move || input.get().shopping == h>
                                    {h.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <NumberField
                label="Household waste (lbs per week)"
                value=input.get_untracked().waste_lbs_per_week
                on_change=Callback::new(move |v| set_input.update(|i| i.waste_lbs_per_week = v))
            />

            <div class="checkbox-row">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || input.get().recycling
                        on:change=move |ev| {
                            set_input.update(|i| i.recycling = event_target_checked(&ev))
                        }
                    />
                    "We recycle"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || input.get().composting
                        on:change=move |ev| {
                            set_input.update(|i| i.composting = event_target_checked(&ev))
                        }
                    />
                    "We compost"
                </label>
            </div>
        </div>
    }
}

#[component]
fn CarbonResults(
    result: CarbonResult,
    input: CarbonInput,
    on_reset: impl Fn(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    let shares: Vec<(String, f64)> = result
        .breakdown
        .iter()
        .map(|c| (c.category.as_str().to_string(), c.percentage))
        .collect();
    let projected: Vec<f64> = result.trend.iter().map(|p| p.projected_kg).collect();
    let target: Vec<f64> = result.trend.iter().map(|p| p.target_kg).collect();

    let export = {
        let result = result.clone();
        move |_| {
            let envelope = ExportEnvelope::new(input.clone(), result.clone());
            if let Ok(json) = envelope.to_json() {
                download_json(&export_filename("carbon"), &json);
            }
        }
    };

    view! {
        <div class="results-panel">
            <div class="result-headline">
                <h2>{format!("{:.0} kg CO2e per year", result.total_kg)}</h2>
                <p class="subtitle">"Estimated annual footprint"</p>
            </div>

            <h3>"Breakdown"</h3>
            <BreakdownBars shares=shares/>

            <h3>"Your top reduction actions"</h3>
            <ol class="recommendations">
                {result
                    .recommendations
                    .iter()
                    .map(|r| {
                        view! {
                            <li class="recommendation">
                                <span class="rec-action">{r.action.clone()}</span>
                                <span class="rec-category">{r.category.as_str()}</span>
                                <span class="rec-savings">
                                    {format!("-{:.0} kg/yr", r.potential_savings_kg)}
                                </span>
                                <span class="rec-difficulty">{r.difficulty.as_str()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <h3>"12-month outlook"</h3>
            <p class="chart-note">"Illustrative trend toward a 50% reduction target, not a forecast."</p>
            <LineChart label="Projected vs target (kg CO2e)" primary=projected secondary=target/>

            <div class="result-actions">
                <button class="btn" on:click=export>"Export JSON"</button>
                <button class="btn btn-secondary" on:click=on_reset>"Start Over"</button>
            </div>
        </div>
    }
}
