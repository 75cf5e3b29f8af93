pub mod sidebar;

use crate::routes::routes::RoutePath;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |  (icons)  |          (page)              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    /// Route of the page being shown, used to highlight the sidebar icon.
    active: RoutePath,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar active=active />
            <div class="app-main">{children()}</div>
        </div>
    }
}
