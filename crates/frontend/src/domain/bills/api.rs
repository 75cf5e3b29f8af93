//! Store client for the bills collection.

use contracts::domain::bills::{Bill, BillDraft, BillDto};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;

/// Remote bills collection: `list`, `create`, `update`.
///
/// Behind a trait so the page view-models can run against an in-memory
/// store in tests.
#[allow(async_fn_in_trait)]
pub trait BillsApi {
    /// Fetch every bill visible to the connected user.
    async fn list(&self) -> Result<Vec<Bill>, String>;

    /// Upload a proof file and create a draft bill around it.
    async fn create(&self, file: web_sys::File, email: &str) -> Result<BillDraft, String>;

    /// Finalize a draft bill with the submitted form values.
    async fn update(&self, bill: BillDto) -> Result<Bill, String>;
}

/// HTTP implementation of [`BillsApi`].
#[derive(Clone, Copy, Default)]
pub struct RemoteStore;

impl RemoteStore {
    pub fn new() -> Self {
        Self
    }
}

impl BillsApi for RemoteStore {
    async fn list(&self) -> Result<Vec<Bill>, String> {
        let response = Request::get(&api_url("/bills"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Erreur {}", response.status()));
        }

        response
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn create(&self, file: web_sys::File, email: &str) -> Result<BillDraft, String> {
        let form = FormData::new().map_err(|e| format!("{e:?}"))?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
        form.append_with_str("email", email)
            .map_err(|e| format!("{e:?}"))?;

        let response = Request::post(&api_url("/bills"))
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Erreur {}", response.status()));
        }

        response
            .json::<BillDraft>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn update(&self, bill: BillDto) -> Result<Bill, String> {
        let id = bill.id.clone().unwrap_or_default();

        let response = Request::patch(&api_url(&format!("/bills/{}", id)))
            .json(&bill)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Erreur {}", response.status()));
        }

        response
            .json::<Bill>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}
