use contracts::system::session::SessionUser;
use web_sys::window;

const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the session user from localStorage. Anything unreadable or
/// unparseable counts as "not connected".
pub fn load_user() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Persist the session user to localStorage.
pub fn save_user(user: &SessionUser) {
    if let Some(storage) = get_local_storage() {
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
}

/// Drop the session user from localStorage.
pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
