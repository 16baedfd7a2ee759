//! Landing page

use crate::components::Navbar;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Sockpuppet Sentinel" />
        <Navbar />
        <div class="max-w-3xl mx-auto px-6 py-20 text-center">
            <h1 class="text-4xl font-bold text-blue-600 mb-6">"Welcome to Sockpuppet Sentinel"</h1>
            <p class="text-lg text-gray-700 mb-4">
                "Sockpuppet Sentinel is a secure chat interface built as a foundation "
                "for AI-enhanced moderation and research in security-sensitive environments."
            </p>
            <p class="text-md text-gray-600">
                "Explore protected communication via the "
                <a href="/chat" class="font-semibold text-blue-600">"Chat"</a>
                " page or learn more about the system via the navigation links above."
            </p>
        </div>
    }
}
