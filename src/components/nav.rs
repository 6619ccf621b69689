use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::web_sys;
use leptos_router::components::A;

use crate::server_fns::{get_current_user, Logout};

#[component]
pub fn Nav() -> impl IntoView {
    let user = Resource::new(|| (), |_| get_current_user());
    let logout_action = ServerAction::<Logout>::new();

    // After signing out, do a full navigation to refresh the page state
    Effect::new(move |_| {
        if let Some(Ok(_)) = logout_action.value().get() {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
        }
    });

    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <A href="/">"Verdant"</A>
            </div>

            <div class="nav-links">
                <A href="/carbon">"Carbon Calculator"</A>
                <A href="/roi">"ROI Calculator"</A>
                <A href="/pricing">"Pricing"</A>
                <A href="/case-studies">"Case Studies"</A>
                <Suspense fallback=|| ()>
                    {move || {
                        user.get().map(|result| {
                            match result {
                                Ok(Some(u)) => view! {
                                    <A href="/dashboard">"Dashboard"</A>
                                    <span class="user-name">{u.name}</span>
                                    <ActionForm action=logout_action attr:class="logout-form">
                                        <button type="submit" class="btn btn-small">"Sign Out"</button>
                                    </ActionForm>
                                }.into_any(),
                                _ => view! {
                                    <A href="/login">"Sign In"</A>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </div>
        </nav>
    }
}
