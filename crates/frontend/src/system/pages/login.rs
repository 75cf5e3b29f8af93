use contracts::system::session::SessionUser;
use leptos::prelude::*;

use crate::routes::routes::{navigate, RoutePath};
use crate::system::session::context::{use_session, SessionState};
use crate::system::session::storage;

/// Employee login page. There is no authentication backend in scope:
/// submitting establishes the session locally and routes to the bills.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (_, set_session) = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let user = SessionUser::employee(email.get());
        storage::save_user(&user);
        set_session.set(SessionState { user: Some(user) });

        navigate(RoutePath::Bills);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{"Billed"}</h1>
                <h2>{"Employé"}</h2>

                <form on:submit=on_submit data-testid="form-employee">
                    <div class="form-group">
                        <label for="employee-email">{"Adresse email"}</label>
                        <input
                            type="email"
                            id="employee-email"
                            data-testid="employee-email-input"
                            placeholder="johndoe@email.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="employee-password">{"Mot de passe"}</label>
                        <input
                            type="password"
                            id="employee-password"
                            data-testid="employee-password-input"
                            required
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" data-testid="employee-login-button">
                        {"Se connecter"}
                    </button>
                </form>
            </div>
        </div>
    }
}
