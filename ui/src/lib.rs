//! Sockpuppet Sentinel web client
//!
//! Leptos frontend for the Sentinel chat backend. The chat page is gated on
//! a client-side token check; everything else renders directly.

pub mod components;
pub mod pages;
pub mod platform;
pub mod state;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use components::ProtectedRoute;
use pages::{
    about::AboutPage, chat::ChatPage, contact::ContactPage, home::HomePage, login::LoginPage,
    status::StatusPage,
};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(state::browser_session());

    view! {
        <Router>
            <main class="min-h-screen bg-gray-50 text-gray-800">
                // Catch-all: unknown paths go to login
                <Routes fallback=|| view! { <Redirect path="/login" /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/status") view=StatusPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route
                        path=path!("/chat")
                        view=|| view! {
                            <ProtectedRoute>
                                <ChatPage />
                            </ProtectedRoute>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
