//! Login page

use crate::components::{ErrorNotice, LoadingSpinner, Navbar};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use sentinel_session::{Route, SessionContext, ViewState, LOGIN_FAILED_MESSAGE};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(ViewState::<()>::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Ignore resubmits while a request is pending
        if !state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let session = session.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match session.login(&username_val, &password_val).await {
                Ok(_) => {
                    state.set(ViewState::Success(()));
                    navigate(Route::Chat.path(), Default::default());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    state.set(ViewState::Error(LOGIN_FAILED_MESSAGE.to_string()));
                }
            }
        });
    };

    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <Title text="Login - Sockpuppet Sentinel" />
        <Navbar />
        <div class="max-w-md mx-auto mt-20 p-8 border rounded-lg shadow-md">
            <h1 class="text-2xl font-bold text-center text-blue-600 mb-6">"Login to Sentinel"</h1>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700" for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        class="mt-1 w-full px-3 py-2 border rounded-md"
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        class="mt-1 w-full px-3 py-2 border rounded-md"
                    />
                </div>
                <button
                    type="submit"
                    disabled=is_loading
                    class="w-full py-2 bg-blue-600 text-white rounded-md disabled:opacity-50"
                >
                    <Show when=is_loading fallback=|| "Login">
                        <LoadingSpinner />
                        "Logging in..."
                    </Show>
                </button>
            </form>
            {move || {
                state
                    .with(|s| s.error().map(str::to_owned))
                    .map(|message| view! { <ErrorNotice message=message /> })
            }}
        </div>
    }
}
