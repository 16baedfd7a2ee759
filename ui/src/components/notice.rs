//! Inline result cards

use leptos::prelude::*;

#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class="mt-6 p-4 border border-rose-400 bg-rose-50 rounded-md text-rose-600">
            <strong>"Error: "</strong>
            {message}
        </div>
    }
}

#[component]
pub fn SuccessNotice(label: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="mt-6 p-4 border border-emerald-400 bg-emerald-50 rounded-md text-emerald-700">
            <strong>{label}" "</strong>
            {message}
        </div>
    }
}
