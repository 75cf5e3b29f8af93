use leptos::prelude::*;

use super::view_model::NewBillViewModel;
use crate::domain::bills::api::RemoteStore;
use crate::layout::Shell;
use crate::routes::routes::RoutePath;
use crate::system::session::context::use_session;

const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

#[component]
pub fn NewBillPage() -> impl IntoView {
    let vm = NewBillViewModel::new(RemoteStore::new());
    let (session, _) = use_session();

    let session_email =
        move || session.get_untracked().user.map(|u| u.email).unwrap_or_default();

    let vm_clone = vm.clone();

    view! {
        <Shell active=RoutePath::NewBill>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Envoyer une note de frais"}</div>
                </div>

                {
                    let vm = vm_clone.clone();
                    move || vm.error.get().map(|e| view! {
                        <div class="error-message" data-testid="error-message">{e}</div>
                    })
                }

                <form
                    data-testid="form-new-bill"
                    on:submit={
                        let vm = vm_clone.clone();
                        move |ev| vm.handle_submit(ev, session_email())
                    }
                >
                    <div class="form-group">
                        <label for="expense-type">{"Type de dépense"}</label>
                        <select
                            id="expense-type"
                            data-testid="expense-type"
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.expense_type = event_target_value(&ev));
                                }
                            }
                        >
                            {EXPENSE_TYPES.into_iter().map(|t| view! {
                                <option value=t>{t}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="expense-name">{"Nom de la dépense"}</label>
                        <input
                            type="text"
                            id="expense-name"
                            data-testid="expense-name"
                            placeholder="Vol Paris Londres"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().expense_name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.expense_name = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="datepicker">{"Date"}</label>
                        <input
                            type="date"
                            id="datepicker"
                            data-testid="datepicker"
                            required
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().date
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.date = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="amount">{"Montant TTC"}</label>
                        <input
                            type="number"
                            id="amount"
                            data-testid="amount"
                            placeholder="348"
                            required
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().amount
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.amount = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="vat">{"TVA"}</label>
                        <input
                            type="number"
                            id="vat"
                            data-testid="vat"
                            placeholder="70"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().vat
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.vat = event_target_value(&ev));
                                }
                            }
                        />
                        <input
                            type="number"
                            id="pct"
                            data-testid="pct"
                            placeholder="20"
                            required
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().pct
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.pct = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="commentary">{"Commentaire"}</label>
                        <textarea
                            id="commentary"
                            data-testid="commentary"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().commentary
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.commentary = event_target_value(&ev));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="file">{"Justificatif"}</label>
                        <input
                            type="file"
                            id="file"
                            data-testid="file"
                            required
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| vm.handle_file_change(ev, session_email())
                            }
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" id="btn-send-bill">
                        {"Envoyer"}
                    </button>
                </form>
            </div>
        </Shell>
    }
}
