use leptos::prelude::*;
use leptos_router::components::A;

struct Tier {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Starter",
        price: "$0",
        blurb: "For curious households",
        features: &[
            "Carbon footprint estimator",
            "Top 5 reduction actions",
            "JSON export",
        ],
        highlighted: false,
    },
    Tier {
        name: "Pro",
        price: "$29/mo",
        blurb: "For serious planners",
        features: &[
            "Everything in Starter",
            "Investment ROI optimizer",
            "Technology comparison table",
            "Demo dashboard access",
        ],
        highlighted: true,
    },
    Tier {
        name: "Business",
        price: "$99/mo",
        blurb: "For teams and installers",
        features: &[
            "Everything in Pro",
            "Multi-site projections",
            "Priority assistant support",
        ],
        highlighted: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <div class="page-header">
                <h1>"Pricing"</h1>
                <p class="subtitle">"Start free. Upgrade when the numbers convince you."</p>
            </div>

            <div class="pricing-grid">
                {TIERS
                    .iter()
                    .map(|tier| {
                        view! {
                            <div class="pricing-card" class:highlighted=tier.highlighted>
                                <h2>{tier.name}</h2>
                                <p class="price">{tier.price}</p>
                                <p class="blurb">{tier.blurb}</p>
                                <ul>
                                    {tier
                                        .features
                                        .iter()
                                        .map(|f| view! { <li>{*f}</li> })
                                        .collect_view()}
                                </ul>
                                <A href="/login" attr:class="btn btn-primary">"Get Started"</A>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
