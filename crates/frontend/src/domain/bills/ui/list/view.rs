use leptos::prelude::*;

use super::view_model::BillsViewModel;
use crate::domain::bills::api::RemoteStore;
use crate::layout::Shell;
use crate::routes::routes::{navigate, RoutePath};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn BillsPage() -> impl IntoView {
    let vm = BillsViewModel::new(RemoteStore::new());
    vm.load();

    let vm_error = vm.clone();
    let vm_rows = vm.clone();
    let vm_modal = vm.clone();

    view! {
        <Shell active=RoutePath::Bills>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{"Mes notes de frais"}</div>
                    <button
                        type="button"
                        class="btn btn-primary"
                        data-testid="btn-new-bill"
                        on:click=move |_| navigate(RoutePath::NewBill)
                    >
                        {"Nouvelle note de frais"}
                    </button>
                </div>

                {move || vm_error.error.get().map(|e| view! {
                    <div class="error-message" data-testid="error-message">{e}</div>
                })}

                <div class="table">
                    <table id="data-table">
                        <thead>
                            <tr>
                                <th>{"Type"}</th>
                                <th>{"Nom"}</th>
                                <th>{"Date"}</th>
                                <th>{"Montant"}</th>
                                <th>{"Statut"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody data-testid="tbody">
                            {move || vm_rows.rows.get().into_iter().map(|row| {
                                let vm = vm_rows.clone();
                                let file_url = row.file_url.clone();
                                view! {
                                    <tr>
                                        <td>{row.expense_type}</td>
                                        <td>{row.name}</td>
                                        <td>{row.date}</td>
                                        <td>{row.amount}</td>
                                        <td>{row.status}</td>
                                        <td>
                                            <div
                                                class="icon-actions"
                                                data-testid="icon-eye"
                                                on:click=move |_| vm.open_preview(file_url.clone())
                                            >
                                                {icon("eye")}
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                {move || {
                    let vm = vm_modal.clone();
                    vm_modal.preview.get().map(|url| view! {
                        <Modal
                            title=String::from("Justificatif")
                            on_close=Callback::new(move |_| vm.close_preview())
                        >
                            <div class="bill-proof-container">
                                <img src=url alt="Bill" data-testid="modal-file" />
                            </div>
                        </Modal>
                    })
                }}
            </div>
        </Shell>
    }
}
