//! Guard wrapper for routes that need a session

use leptos::prelude::*;
use sentinel_session::{Access, SessionContext};

/// Renders `children` only behind a valid session.
///
/// The check runs once per mount, i.e. once per navigation to the route. On
/// deny the guard has already cleared storage and started a full-page
/// redirect to `/login`; this only fills the gap until the browser leaves.
#[component]
pub fn ProtectedRoute(children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    match session.guard().enforce() {
        Access::Allow => children().into_any(),
        Access::Deny => view! {
            <p class="max-w-xl mx-auto px-6 py-20 text-center text-gray-500">
                "Redirecting to login..."
            </p>
        }
        .into_any(),
    }
}
