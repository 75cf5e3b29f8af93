use crate::domain::bills::ui::list::BillsPage;
use crate::domain::bills::ui::new::NewBillPage;
use crate::system::pages::login::LoginPage;
use crate::system::session::context::use_session;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Route constants, mapped to URL hash fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
}

impl RoutePath {
    pub fn as_hash(&self) -> &'static str {
        match self {
            RoutePath::Login => "#login",
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
        }
    }

    /// Unknown or empty fragments fall back to the login route.
    pub fn from_hash(hash: &str) -> Self {
        match hash {
            "#employee/bills" => RoutePath::Bills,
            "#employee/bill/new" => RoutePath::NewBill,
            _ => RoutePath::Login,
        }
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Navigation primitive handed to the containers: sets the URL hash, and
/// the hashchange listener in [`AppRoutes`] swaps the page.
pub fn navigate(route: RoutePath) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(route.as_hash());
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();
    let (route, set_route) = signal(RoutePath::from_hash(&current_hash()));

    // Keep the route signal in sync with the URL hash. Runs once when the
    // component is created; the closure must outlive it.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            set_route.set(RoutePath::from_hash(&current_hash()));
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <Show
            when=move || session.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            {move || match route.get() {
                RoutePath::NewBill => view! { <NewBillPage /> }.into_any(),
                // A connected employee landing on #login (or anything else)
                // is sent to their bills.
                RoutePath::Bills | RoutePath::Login => view! { <BillsPage /> }.into_any(),
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        for route in [RoutePath::Login, RoutePath::Bills, RoutePath::NewBill] {
            assert_eq!(RoutePath::from_hash(route.as_hash()), route);
        }
    }

    #[test]
    fn unknown_hash_falls_back_to_login() {
        assert_eq!(RoutePath::from_hash(""), RoutePath::Login);
        assert_eq!(RoutePath::from_hash("#admin/dashboard"), RoutePath::Login);
        assert_eq!(RoutePath::from_hash("#employee/bills/extra"), RoutePath::Login);
    }
}
