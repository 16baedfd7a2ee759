//! Contact placeholder

use crate::components::Navbar;
use leptos::prelude::*;
use leptos_meta::Title;

const CONTACT_EMAIL: &str = "contact@sockpuppetsentinel.dev";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact - Sockpuppet Sentinel" />
        <Navbar />
        <div class="max-w-xl mx-auto px-6 py-20 text-center">
            <h1 class="text-3xl font-bold text-blue-600 mb-6">"Contact Us"</h1>
            <p class="text-md text-gray-700 mb-4">
                "This project is still under active development. For feedback, "
                "collaboration, or support, reach us at:"
            </p>
            <a href=format!("mailto:{}", CONTACT_EMAIL) class="text-md font-semibold text-blue-600">
                {CONTACT_EMAIL}
            </a>
            <p class="mt-4 text-sm italic text-gray-500">
                "(Email handling is not wired up yet.)"
            </p>
        </div>
    }
}
