use contracts::domain::bills::Bill;
use leptos::prelude::*;

use crate::domain::bills::api::BillsApi;
use crate::shared::format::format_date;

/// A bill projected for table display.
#[derive(Clone, Debug, PartialEq)]
pub struct BillRow {
    pub id: String,
    pub expense_type: String,
    pub name: String,
    /// Display date; falls back to the raw store value when unparseable.
    pub date: String,
    /// Raw ISO date kept for ordering.
    pub raw_date: String,
    pub amount: String,
    pub status: String,
    pub file_url: Option<String>,
}

impl From<Bill> for BillRow {
    fn from(bill: Bill) -> Self {
        // A corrupted date must not take the row down with it: the raw
        // string stays on screen.
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(_) => bill.date.clone(),
        };

        Self {
            id: bill.id,
            expense_type: bill.expense_type,
            name: bill.name,
            date,
            raw_date: bill.date,
            amount: format!("{} €", bill.amount),
            status: bill.status.label().to_string(),
            file_url: bill.file_url,
        }
    }
}

/// Fetch the bill list and project it for display. Order and record
/// count come back exactly as the store returned them.
pub async fn fetch_rows<S: BillsApi>(store: &S) -> Result<Vec<BillRow>, String> {
    let bills = store.list().await?;
    Ok(bills.into_iter().map(Into::into).collect())
}

/// Order rows by raw ISO date, most recent first.
pub fn sort_latest_first(rows: &mut [BillRow]) {
    rows.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));
}

/// ViewModel for the bills list page.
#[derive(Clone)]
pub struct BillsViewModel<S: BillsApi + Clone + 'static> {
    store: S,
    pub rows: RwSignal<Vec<BillRow>>,
    pub error: RwSignal<Option<String>>,
    /// Proof-image URL currently shown in the preview modal.
    pub preview: RwSignal<Option<String>>,
}

impl<S: BillsApi + Clone + 'static> BillsViewModel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            rows: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            preview: RwSignal::new(None),
        }
    }

    /// Load bills from the store, latest first. A rejection lands in
    /// `error` verbatim; there is no retry.
    pub fn load(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_rows(&this.store).await {
                Ok(mut rows) => {
                    sort_latest_first(&mut rows);
                    this.rows.set(rows);
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    pub fn open_preview(&self, file_url: Option<String>) {
        if let Some(url) = file_url {
            self.preview.set(Some(url));
        }
    }

    pub fn close_preview(&self) {
        self.preview.set(None);
    }
}

#[cfg(test)]
mod tests {
    use contracts::domain::bills::BillStatus;
    use futures::executor::block_on;

    use super::*;
    use crate::domain::bills::api::testing::MockStore;

    fn bill(id: &str, date: &str, status: BillStatus) -> Bill {
        Bill {
            id: id.to_string(),
            date: date.to_string(),
            status,
            name: format!("Facture {}", id),
            expense_type: "Transports".to_string(),
            amount: 100.0,
            vat: "20".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some("https://localhost/proof.jpg".to_string()),
            file_name: Some("proof.jpg".to_string()),
            email: "employee@test.com".to_string(),
        }
    }

    #[test]
    fn row_formats_date_and_status() {
        let row = BillRow::from(bill("1", "2022-01-01", BillStatus::Pending));
        assert_eq!(row.date, "1 Janv. 22");
        assert_eq!(row.status, "En attente");
        assert_eq!(row.amount, "100 €");
    }

    #[test]
    fn corrupted_date_stays_raw() {
        let row = BillRow::from(bill("1", "not-a-date", BillStatus::Accepted));
        assert_eq!(row.date, "not-a-date");
        assert_eq!(row.status, "Accepté");
    }

    #[test]
    fn fetch_preserves_count_and_order() {
        let store = MockStore::with_bills(vec![
            bill("1", "2021-11-05", BillStatus::Pending),
            bill("2", "2022-03-02", BillStatus::Refused),
            bill("3", "not-a-date", BillStatus::Accepted),
        ]);

        let rows = block_on(fetch_rows(&store)).expect("list succeeds");
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3"]
        );
        // Only the display fields changed.
        assert_eq!(rows[2].date, "not-a-date");
        assert_eq!(rows[1].status, "Refusé");
    }

    #[test]
    fn rows_sort_latest_first() {
        let mut rows: Vec<BillRow> = vec![
            bill("old", "2020-01-15", BillStatus::Pending).into(),
            bill("new", "2022-06-30", BillStatus::Pending).into(),
            bill("mid", "2021-09-01", BillStatus::Pending).into(),
        ];
        sort_latest_first(&mut rows);
        assert_eq!(
            rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["new", "mid", "old"]
        );
    }

    #[test]
    fn list_failure_surfaces_message_verbatim() {
        let store = MockStore::failing("Erreur 404");
        assert_eq!(block_on(fetch_rows(&store)), Err("Erreur 404".to_string()));
    }
}
