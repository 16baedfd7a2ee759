//! Backend health check page

use crate::components::{ErrorNotice, Navbar, SuccessNotice};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use sentinel_session::{SessionContext, ViewState};

#[component]
pub fn StatusPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = RwSignal::new(ViewState::<String>::Loading);

    // One probe per mount
    spawn_local(async move {
        let result = session.api().health().await.map(|h| h.status);
        if let Err(e) = &result {
            tracing::warn!("Health check failed: {}", e);
        }
        state.update(|s| s.settle(result));
    });

    view! {
        <Title text="Status - Sockpuppet Sentinel" />
        <Navbar />
        <div class="max-w-xl mx-auto px-6 py-20 text-center">
            <h1 class="text-3xl font-bold text-blue-600 mb-6">"System Status"</h1>
            {move || match state.get() {
                ViewState::Success(status) => {
                    view! { <SuccessNotice label="Status:" message=status /> }.into_any()
                }
                ViewState::Error(message) => view! { <ErrorNotice message=message /> }.into_any(),
                ViewState::Idle | ViewState::Loading => {
                    view! { <p class="text-gray-500">"Checking system health..."</p> }.into_any()
                }
            }}
        </div>
    }
}
