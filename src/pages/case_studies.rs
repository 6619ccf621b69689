use leptos::prelude::*;

struct CaseStudy {
    title: &'static str,
    sector: &'static str,
    summary: &'static str,
    metric: &'static str,
}

const CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        title: "Hillcrest Dairy Cooperative",
        sector: "Agriculture",
        summary: "A 400 kW rooftop array across three barns, sized with the ROI optimizer \
                  and financed against projected savings.",
        metric: "Payback in 6.8 years",
    },
    CaseStudy {
        title: "Mercer County School District",
        sector: "Public sector",
        summary: "Twelve schools compared solar against a solar-plus-battery hybrid; the \
                  comparison table settled a two-year procurement debate in an afternoon.",
        metric: "31% lower energy spend",
    },
    CaseStudy {
        title: "The Fairweather Hotel",
        sector: "Hospitality",
        summary: "Started with the carbon estimator, ended with heat pumps and a plant-forward \
                  menu. The top-five actions list became their sustainability roadmap.",
        metric: "44% footprint reduction",
    },
    CaseStudy {
        title: "Kestrel Logistics",
        sector: "Transport",
        summary: "Fleet electrification modelled as a phased investment; battery storage \
                  shifts depot charging off peak rates.",
        metric: "$210k annual savings",
    },
];

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    view! {
        <div class="case-studies-page">
            <div class="page-header">
                <h1>"Case Studies"</h1>
                <p class="subtitle">"What the numbers looked like for teams who ran them"</p>
            </div>

            <div class="case-grid">
                {CASE_STUDIES
                    .iter()
                    .map(|cs| {
                        view! {
                            <article class="case-card">
                                <span class="case-sector">{cs.sector}</span>
                                <h2>{cs.title}</h2>
                                <p>{cs.summary}</p>
                                <p class="case-metric">{cs.metric}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
