use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Read-only session object supplied to the component tree.
/// The demo has no password verification; signing in just records
/// who is looking at the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(session.get("user").await.ok().flatten())
}

#[server]
pub async fn demo_sign_in(name: String, email: String) -> Result<SessionUser, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    if name.trim().is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Please enter a name and a valid email"));
    }

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let session_user = SessionUser {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    };
    session.insert("user", &session_user).await?;
    Ok(session_user)
}

#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session.delete().await?;
    Ok(())
}
