use crate::routes::routes::{navigate, RoutePath};
use crate::shared::icons::icon;
use crate::system::session::context::{use_session, SessionState};
use crate::system::session::storage;
use leptos::prelude::*;

/// Vertical icon navigation. The window icon leads to the bills list, the
/// mail icon to the new bill form; the active page's icon is highlighted.
#[component]
pub fn Sidebar(active: RoutePath) -> impl IntoView {
    let (_, set_session) = use_session();

    let handle_logout = move |_| {
        storage::clear_user();
        set_session.set(SessionState::default());
        navigate(RoutePath::Login);
    };

    view! {
        <nav class="vertical-navbar">
            <div class="navbar-title">{"Billed"}</div>
            <div
                class="layout-icon"
                class:active-icon=move || active == RoutePath::Bills
                data-testid="icon-window"
                on:click=move |_| navigate(RoutePath::Bills)
            >
                {icon("window")}
            </div>
            <div
                class="layout-icon"
                class:active-icon=move || active == RoutePath::NewBill
                data-testid="icon-mail"
                on:click=move |_| navigate(RoutePath::NewBill)
            >
                {icon("mail")}
            </div>
            <div class="layout-disconnect" data-testid="layout-disconnect" on:click=handle_logout>
                {icon("logout")}
            </div>
        </nav>
    }
}
