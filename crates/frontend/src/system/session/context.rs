use contracts::system::session::SessionUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

/// Session context provider component.
///
/// Restores the session from localStorage once at mount, then exposes it
/// to the whole tree. Containers never touch localStorage directly.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState {
        user: storage::load_user(),
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}
