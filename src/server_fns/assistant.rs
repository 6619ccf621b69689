use leptos::prelude::*;

use crate::models::AssistantStatus;

/// Reply plus the connectivity state the widget should display
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub status: AssistantStatus,
}

#[server]
pub async fn send_chat_message(message: String) -> Result<ChatReply, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use crate::state::AppState;

    if message.trim().is_empty() {
        return Err(ServerFnError::new("Message is empty"));
    }

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (response, status) = state.assistant.send(&message, None).await;
    Ok(ChatReply { response, status })
}

#[server]
pub async fn get_assistant_status() -> Result<AssistantStatus, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use crate::state::AppState;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(state.assistant.status())
}

/// Manual recovery from offline mode
#[server]
pub async fn set_assistant_online() -> Result<AssistantStatus, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use crate::state::AppState;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    state.assistant.set_online();
    Ok(state.assistant.status())
}
