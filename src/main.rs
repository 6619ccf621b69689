#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::routing::post;
    use axum::{Extension, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use std::sync::Arc;
    use tower_sessions::{MemoryStore, SessionManagerLayer};
    use verdant::services::assistant::Assistant;
    use verdant::services::telemetry::MockTelemetry;
    use verdant::{state::AppState, App};

    // Load env vars
    dotenvy::dotenv().ok();

    // Create app state
    let state = AppState {
        assistant: Arc::new(Assistant::new(
            std::env::var("GEMINI_API_KEY").unwrap_or_default(),
        )),
        telemetry: Arc::new(MockTelemetry::new(42.0)),
    };

    // Session store
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(std::env::var("PRODUCTION").is_ok())
        .with_same_site(tower_sessions::cookie::SameSite::Lax);

    // Leptos config
    let conf = get_configuration(None).expect("Failed to load Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    // Build router
    let app = Router::new()
        .route("/api/chat", post(chat_proxy))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(Extension(state))
        .layer(session_layer)
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("Listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

/// `POST /api/chat` with `{message, apiKey}`, answering `{response}` on
/// success or `{error}` with a 400 when the request itself is malformed.
/// A non-blank `apiKey` in the request overrides the server-configured key
/// for that call. Upstream failures still answer 200 with a canned
/// fallback response.
#[cfg(feature = "ssr")]
async fn chat_proxy(
    axum::Extension(state): axum::Extension<verdant::state::AppState>,
    axum::Json(request): axum::Json<verdant::models::ChatRequest>,
) -> Result<
    axum::Json<verdant::models::ChatResponse>,
    (axum::http::StatusCode, axum::Json<verdant::models::ChatFailure>),
> {
    use verdant::models::{ChatFailure, ChatResponse};

    if request.message.trim().is_empty() {
        return Err((
            axum::http::StatusCode::BAD_REQUEST,
            axum::Json(ChatFailure {
                error: "message is empty".into(),
            }),
        ));
    }

    let (response, _status) = state
        .assistant
        .send(&request.message, Some(request.api_key.as_str()))
        .await;
    Ok(axum::Json(ChatResponse { response }))
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::config::LeptosOptions) -> impl leptos::IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;
    use verdant::App;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client-side entry point handled by hydrate() in lib.rs
}
