//! Guarded chat page

use crate::components::{ErrorNotice, LoadingSpinner, Navbar};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use sentinel_session::{SessionContext, ViewState};

/// Only mounted behind `ProtectedRoute`.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let message = RwSignal::new(String::new());
    let state = RwSignal::new(ViewState::<String>::Idle);

    let session_for_submit = session.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = message.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        if !state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let session = session_for_submit.clone();
        spawn_local(async move {
            let result = session.api().chat(&text).await.map(|r| r.reply);
            if let Err(e) = &result {
                tracing::warn!("Chat request failed: {}", e);
            }
            state.update(|s| s.settle(result));
        });
    };

    let on_logout = move |_| session.guard().logout();
    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <Title text="Chat - Sockpuppet Sentinel" />
        <Navbar />
        <div class="max-w-2xl mx-auto px-6 py-12">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold text-blue-600">"Chat Interface"</h1>
                <button
                    on:click=on_logout
                    class="px-4 py-2 text-sm text-white bg-rose-500 rounded-md"
                >
                    "Log Out"
                </button>
            </div>
            <form on:submit=on_submit class="space-y-4">
                <label class="block text-sm font-medium text-gray-700" for="message">
                    "Your Message"
                </label>
                <textarea
                    id="message"
                    rows="4"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                    class="w-full px-3 py-2 border rounded-md"
                ></textarea>
                <button
                    type="submit"
                    disabled=is_loading
                    class="px-4 py-2 bg-blue-600 text-white rounded-md disabled:opacity-50"
                >
                    <Show when=is_loading fallback=|| "Ask the Sentinel">
                        <LoadingSpinner />
                        "Sending..."
                    </Show>
                </button>
            </form>
            {move || match state.get() {
                ViewState::Success(reply) => {
                    view! {
                        <div class="mt-6 p-4 border rounded-md bg-gray-50">
                            <strong>"Sentinel: "</strong>
                            <p class="whitespace-pre-wrap">{reply}</p>
                        </div>
                    }
                        .into_any()
                }
                ViewState::Error(message) => view! { <ErrorNotice message=message /> }.into_any(),
                ViewState::Idle | ViewState::Loading => ().into_any(),
            }}
        </div>
    }
}
