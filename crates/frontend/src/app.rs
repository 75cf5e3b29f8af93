use crate::routes::routes::AppRoutes;
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The session context wraps the router so the auth gate can read it.
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
