//! Purpose and design of the project

use crate::components::Navbar;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - Sockpuppet Sentinel" />
        <Navbar />
        <div class="max-w-3xl mx-auto px-6 py-20">
            <h1 class="text-3xl font-bold text-blue-600 mb-6">"About Sockpuppet Sentinel"</h1>
            <p class="mb-4 text-lg">
                "Sockpuppet Sentinel is a secure-by-default chat client developed to support "
                "AI-assisted moderation and privacy-conscious communication."
            </p>
            <p class="mb-4 text-md text-gray-700">
                "The project leans on JWT authentication, input sanitization and IP-based "
                "access control on the backend, and lays the groundwork for integrating "
                "large language models and moderation frameworks."
            </p>
            <p class="text-sm italic text-gray-500">
                "Session expiry shown here is checked in the browser for convenience only. "
                "Every request is verified again by the backend."
            </p>
        </div>
    }
}
