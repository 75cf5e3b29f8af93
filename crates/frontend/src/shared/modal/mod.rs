use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Close on Escape
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    // Clicking the overlay closes; clicks inside the modal must not bubble
    // up to the overlay.
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
