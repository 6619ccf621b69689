use leptos::prelude::*;

use crate::models::ChatMessage;
use crate::server_fns::{get_assistant_status, send_chat_message, set_assistant_online};

/// Floating assistant widget. One Action with the send button locked while
/// it is pending keeps at most one request in flight per submission.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (transcript, set_transcript) = signal(Vec::<ChatMessage>::new());
    let (offline, set_offline) = signal(false);

    // Pick up a latched offline state from a previous visit
    let status = Resource::new(|| (), |_| get_assistant_status());
    Effect::new(move |_| {
        if let Some(Ok(s)) = status.get() {
            set_offline.set(s.offline);
        }
    });

    let send = Action::new(move |message: &String| {
        let message = message.clone();
        async move {
            set_transcript.update(|t| {
                t.push(ChatMessage {
                    from_user: true,
                    text: message.clone(),
                })
            });

            match send_chat_message(message).await {
                Ok(reply) => {
                    set_offline.set(reply.status.offline);
                    set_transcript.update(|t| {
                        t.push(ChatMessage {
                            from_user: false,
                            text: reply.response,
                        })
                    });
                }
                Err(e) => {
                    set_transcript.update(|t| {
                        t.push(ChatMessage {
                            from_user: false,
                            text: format!("Something went wrong: {e}"),
                        })
                    });
                }
            }
        }
    });

    let go_online = Action::new(move |_: &()| async move {
        if let Ok(status) = set_assistant_online().await {
            set_offline.set(status.offline);
        }
    });

    let submit = move || {
        let message = draft.get();
        if message.trim().is_empty() || send.pending().get() {
            return;
        }
        set_draft.set(String::new());
        send.dispatch(message);
    };

    view! {
        <div class="chat-widget">
            <button
                class="chat-toggle"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "×" } else { "Ask Verdant" }}
            </button>

            <Show when=move || open.get()>
                <div class="chat-panel">
                    <div class="chat-header">
                        <span>"Verdant Assistant"</span>
                        <Show when=move || offline.get()>
                            <div class="chat-offline-banner">
                                "Offline mode - replies are canned"
                                <button
                                    class="btn btn-small"
                                    on:click=move |_| { go_online.dispatch(()); }
                                >
                                    "Go back online"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <div class="chat-messages">
                        {move || {
                            transcript
                                .get()
                                .into_iter()
                                .map(|m| {
                                    let class = if m.from_user { "chat-msg user" } else { "chat-msg bot" };
                                    view! { <div class=class>{m.text}</div> }
                                })
                                .collect_view()
                        }}
                    </div>

                    <div class="chat-input-row">
                        <input
                            type="text"
                            placeholder="Ask about solar, savings, plans..."
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                        />
                        <button
                            class="btn primary"
                            disabled=move || send.pending().get()
                            on:click=move |_| submit()
                        >
                            {move || if send.pending().get() { "..." } else { "Send" }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
