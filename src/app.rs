use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{ChatWidget, Nav};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/verdant.css"/>
        <Title text="Verdant - Renewable Energy Intelligence"/>
        <Meta name="description" content="Estimate your carbon footprint and project renewable energy ROI"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/pricing") view=PricingPage/>
                    <Route path=path!("/case-studies") view=CaseStudiesPage/>
                    <Route path=path!("/carbon") view=CarbonCalculatorPage/>
                    <Route path=path!("/roi") view=InvestmentCalculatorPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </main>
            <ChatWidget/>
        </Router>
    }
}
