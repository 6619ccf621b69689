use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::server_fns::get_current_user;

/// Where visitors without a session land unless the caller says otherwise
const SIGN_IN_ROUTE: &str = "/login";

/// Resolve the redirect target for an unauthenticated visitor
fn sign_in_route(preferred: Option<String>) -> String {
    match preferred {
        Some(route) if !route.trim().is_empty() => route,
        _ => SIGN_IN_ROUTE.to_string(),
    }
}

/// Wraps signed-in-only content such as the demo dashboard. Visitors
/// without a session are sent to the sign-in page, or to `redirect_to`
/// when a page wants them somewhere else.
#[component]
pub fn AuthGuard(
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let target = sign_in_route(redirect_to);
    let session = Resource::new(|| (), |_| get_current_user());
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let Some(Ok(None)) = session.get() {
            navigate(&target, Default::default());
        }
    });

    view! {
        <Suspense fallback=|| view! { <div class="loading">"Checking your session..."</div> }>
            {move || {
                session.get().map(|result| {
                    match result {
                        Ok(Some(_)) => children().into_any(),
                        _ => view! {
                            <div class="loading">
                                "The dashboard is for signed-in demo users. Taking you to sign in..."
                            </div>
                        }
                        .into_any(),
                    }
                })
            }}
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use super::sign_in_route;

    #[test]
    fn unauthenticated_visitors_default_to_the_sign_in_page() {
        assert_eq!(sign_in_route(None), "/login");
        assert_eq!(sign_in_route(Some(String::new())), "/login");
        assert_eq!(sign_in_route(Some("   ".into())), "/login");
    }

    #[test]
    fn an_explicit_redirect_target_wins() {
        assert_eq!(sign_in_route(Some("/pricing".into())), "/pricing");
    }
}
