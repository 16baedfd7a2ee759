//! Navigation bar shown on every page

use leptos::prelude::*;
use sentinel_session::Route;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-md px-6 py-4 mb-6">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <a href="/" class="text-xl font-bold text-blue-600">"Sockpuppet Sentinel"</a>
                <div class="space-x-4">
                    {Route::NAVBAR
                        .into_iter()
                        .map(|route| view! {
                            <a class="text-gray-700 hover:text-blue-600" href=route.path()>
                                {route.title()}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
