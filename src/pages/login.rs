use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::server_fns::demo_sign_in;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let navigate = use_navigate();

    let sign_in = Action::new(move |(name, email): &(String, String)| {
        let name = name.clone();
        let email = email.clone();
        let navigate = navigate.clone();
        async move {
            set_error.set(None);
            match demo_sign_in(name, email).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    });

    view! {
        <div class="login-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p class="subtitle">"Demo access - no password required"</p>

                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <div class="input-group">
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        placeholder="Ada Lovelace"
                    />
                </div>
                <div class="input-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        placeholder="ada@example.com"
                    />
                </div>

                <button
                    class="btn btn-primary"
                    disabled=move || sign_in.pending().get()
                    on:click=move |_| { sign_in.dispatch((name.get(), email.get())); }
                >
                    {move || if sign_in.pending().get() { "Signing in..." } else { "Enter Demo" }}
                </button>
            </div>
        </div>
    }
}
