use contracts::domain::bills::{Bill, BillDto, BillStatus};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::domain::bills::api::BillsApi;
use crate::routes::routes::RoutePath;

/// Extensions accepted for the proof file.
const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Alert shown when the proof file is not an accepted image type.
pub const FILE_TYPE_MESSAGE: &str = "Seuls les fichiers jpg, jpeg et png sont acceptés";

/// Form field state, bound to the inputs of the new bill form. All
/// values stay strings until submit, like the inputs they mirror.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub expense_name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl Default for NewBillForm {
    fn default() -> Self {
        Self {
            // The select shows its first option by default.
            expense_type: "Transports".to_string(),
            expense_name: String::new(),
            date: String::new(),
            amount: String::new(),
            vat: String::new(),
            pct: String::new(),
            commentary: String::new(),
        }
    }
}

/// Check a proof-file name against the allowed image extensions,
/// case-insensitively.
pub fn allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Build the update payload from the form, the uploaded proof draft and
/// the session user's email. `pct` falls back to 20 when absent or zero.
pub fn build_payload(
    form: &NewBillForm,
    key: Option<String>,
    file_url: Option<String>,
    file_name: Option<String>,
    email: &str,
) -> BillDto {
    BillDto {
        id: key,
        date: form.date.clone(),
        status: BillStatus::Pending,
        name: form.expense_name.clone(),
        expense_type: form.expense_type.clone(),
        amount: form.amount.parse().unwrap_or(0.0),
        vat: form.vat.clone(),
        pct: form
            .pct
            .parse()
            .ok()
            .filter(|pct| *pct != 0)
            .unwrap_or(20),
        commentary: form.commentary.clone(),
        file_url,
        file_name,
        email: email.to_string(),
    }
}

/// ViewModel for the new bill form page.
#[derive(Clone)]
pub struct NewBillViewModel<S: BillsApi + Clone + 'static> {
    store: S,
    pub form: RwSignal<NewBillForm>,
    /// URL of the uploaded proof file, set once `create` succeeds.
    pub file_url: RwSignal<Option<String>>,
    pub file_name: RwSignal<Option<String>>,
    /// Key of the draft bill created by the upload.
    pub bill_key: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl<S: BillsApi + Clone + 'static> NewBillViewModel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            form: RwSignal::new(NewBillForm::default()),
            file_url: RwSignal::new(None),
            file_name: RwSignal::new(None),
            bill_key: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    /// File input change handler. An invalid extension alerts and clears
    /// the input without touching the store; a valid file is uploaded to
    /// create the draft bill.
    pub fn handle_file_change(&self, ev: web_sys::Event, email: String) {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !allowed_extension(&file.name()) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(FILE_TYPE_MESSAGE);
            }
            input.set_value("");
            return;
        }

        let this = self.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = this.upload(file, &email).await {
                log::error!("bill proof upload failed: {}", e);
                this.error.set(Some(e));
            }
        });
    }

    /// Upload the proof file. On success the draft's url/key and the
    /// original file name are stashed for the final submit.
    pub async fn upload(&self, file: web_sys::File, email: &str) -> Result<(), String> {
        let name = file.name();
        let draft = self.store.create(file, email).await?;
        self.apply_draft(name, draft);
        Ok(())
    }

    fn apply_draft(&self, file_name: String, draft: contracts::domain::bills::BillDraft) {
        self.file_url.set(Some(draft.file_url));
        self.bill_key.set(Some(draft.key));
        self.file_name.set(Some(file_name));
        self.error.set(None);
    }

    /// Finalize the bill with the form values; on success route back to
    /// the list. An update rejection is logged, not shown: the record was
    /// already being finalized.
    pub async fn finalize(&self, email: &str, on_navigate: impl Fn(RoutePath)) {
        match self.submit(email).await {
            Ok(_) => on_navigate(RoutePath::Bills),
            Err(e) => log::error!("bill update failed: {}", e),
        }
    }

    /// Send the update combining form values, stashed proof fields and
    /// the session email.
    pub async fn submit(&self, email: &str) -> Result<Bill, String> {
        let payload = build_payload(
            &self.form.get_untracked(),
            self.bill_key.get_untracked(),
            self.file_url.get_untracked(),
            self.file_name.get_untracked(),
            email,
        );
        self.store.update(payload).await
    }

    pub fn handle_submit(&self, ev: leptos::ev::SubmitEvent, email: String) {
        ev.prevent_default();
        let this = self.clone();
        leptos::task::spawn_local(async move {
            this.finalize(&email, crate::routes::routes::navigate).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use contracts::domain::bills::BillDraft;
    use futures::executor::block_on;

    use super::*;
    use crate::domain::bills::api::testing::MockStore;

    #[test]
    fn accepts_only_image_extensions() {
        assert!(allowed_extension("preview-facture.jpg"));
        assert!(allowed_extension("scan.jpeg"));
        assert!(allowed_extension("photo.PNG"));

        assert!(!allowed_extension("facture.pdf"));
        assert!(!allowed_extension("archive.tar.gz"));
        assert!(!allowed_extension("sans-extension"));
        assert!(!allowed_extension(""));
    }

    #[test]
    fn payload_combines_form_draft_and_email() {
        let form = NewBillForm {
            expense_type: "Restaurants et bars".to_string(),
            expense_name: "Repas client".to_string(),
            date: "2023-05-31".to_string(),
            amount: "100".to_string(),
            vat: "20".to_string(),
            pct: "20".to_string(),
            commentary: "Déjeuner avec client".to_string(),
        };

        let payload = build_payload(
            &form,
            Some("1234".to_string()),
            Some("https://localhost/file.jpg".to_string()),
            Some("file.jpg".to_string()),
            "employee@test.com",
        );

        assert_eq!(payload.id.as_deref(), Some("1234"));
        assert_eq!(payload.name, "Repas client");
        assert_eq!(payload.amount, 100.0);
        assert_eq!(payload.pct, 20);
        assert_eq!(payload.status, BillStatus::Pending);
        assert_eq!(payload.file_url.as_deref(), Some("https://localhost/file.jpg"));
        assert_eq!(payload.email, "employee@test.com");
    }

    #[test]
    fn pct_defaults_to_twenty() {
        let form = NewBillForm {
            pct: String::new(),
            ..NewBillForm::default()
        };
        assert_eq!(build_payload(&form, None, None, None, "a@a").pct, 20);

        let form = NewBillForm {
            pct: "0".to_string(),
            ..NewBillForm::default()
        };
        assert_eq!(build_payload(&form, None, None, None, "a@a").pct, 20);
    }

    #[test]
    fn draft_response_is_stashed_on_the_view_model() {
        let vm = NewBillViewModel::new(MockStore::default());
        vm.apply_draft(
            "test.png".to_string(),
            BillDraft {
                file_url: "https://localhost/image.jpg".to_string(),
                key: "1234".to_string(),
            },
        );

        assert_eq!(
            vm.file_url.get_untracked().as_deref(),
            Some("https://localhost/image.jpg")
        );
        assert_eq!(vm.file_name.get_untracked().as_deref(), Some("test.png"));
        assert_eq!(vm.bill_key.get_untracked().as_deref(), Some("1234"));
    }

    #[test]
    fn submit_updates_once_then_navigates_to_bills() {
        let store = MockStore::default();
        let vm = NewBillViewModel::new(store.clone());
        vm.form.set(NewBillForm {
            expense_name: "Vol Paris Londres".to_string(),
            date: "2023-05-31".to_string(),
            amount: "348".to_string(),
            ..NewBillForm::default()
        });
        vm.bill_key.set(Some("1234".to_string()));
        vm.file_url.set(Some("https://localhost/file.jpg".to_string()));
        vm.file_name.set(Some("file.jpg".to_string()));

        let visited = RefCell::new(Vec::new());
        block_on(vm.finalize("employee@test.com", |route| visited.borrow_mut().push(route)));

        let updates = store.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].name, "Vol Paris Londres");
        assert_eq!(updates[0].email, "employee@test.com");
        assert_eq!(*visited.borrow(), vec![RoutePath::Bills]);
    }

    #[test]
    fn failed_update_does_not_navigate() {
        let vm = NewBillViewModel::new(MockStore::failing("Erreur 500"));

        let visited = RefCell::new(Vec::new());
        block_on(vm.finalize("employee@test.com", |route| visited.borrow_mut().push(route)));

        assert!(visited.borrow().is_empty());
    }

    #[test]
    fn store_failure_message_passes_through_verbatim() {
        let vm = NewBillViewModel::new(MockStore::failing("Erreur 500"));
        let err = block_on(vm.submit("a@a")).unwrap_err();
        assert_eq!(err, "Erreur 500");
    }
}
