use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of an expense report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Wire code as stored by the API.
    pub fn code(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    /// Human-readable label shown in the bills table.
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refusé",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BillStatus::Pending),
            "accepted" => Some(BillStatus::Accepted),
            "refused" => Some(BillStatus::Refused),
            _ => None,
        }
    }
}

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Pending
    }
}

// ============================================================================
// Bill record
// ============================================================================

/// An expense report as returned by the bills API.
///
/// `date` stays a raw ISO string on purpose: corrupted values coming back
/// from the store must survive the round trip to the screen unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: u32,
    #[serde(default)]
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

// ============================================================================
// DTOs
// ============================================================================

/// Response of the proof-file upload: the stored file URL plus the key of
/// the draft bill created around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillDraft {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// Update payload finalizing a draft bill with the form values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillDto {
    pub id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: u32,
    #[serde(default)]
    pub commentary: String,
    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(BillStatus::Pending.label(), "En attente");
        assert_eq!(BillStatus::Accepted.label(), "Accepté");
        assert_eq!(BillStatus::Refused.label(), "Refusé");
    }

    #[test]
    fn status_codes_round_trip() {
        for status in [BillStatus::Pending, BillStatus::Accepted, BillStatus::Refused] {
            assert_eq!(BillStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(BillStatus::from_code("archived"), None);
    }

    #[test]
    fn bill_uses_wire_field_names() {
        let raw = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "date": "2004-04-04",
            "status": "pending",
            "name": "encore",
            "type": "Hôtel et logement",
            "amount": 400,
            "vat": "80",
            "pct": 20,
            "commentary": "séminaire billed",
            "fileUrl": "https://test.storage/preview-facture.jpg",
            "fileName": "preview-facture.jpg",
            "email": "a@a"
        }"#;
        let bill: Bill = serde_json::from_str(raw).expect("valid bill json");
        assert_eq!(bill.expense_type, "Hôtel et logement");
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.file_name.as_deref(), Some("preview-facture.jpg"));

        let back = serde_json::to_value(&bill).expect("serializable");
        assert_eq!(back["type"], "Hôtel et logement");
        assert_eq!(back["fileUrl"], "https://test.storage/preview-facture.jpg");
        assert_eq!(back["status"], "pending");
    }

    #[test]
    fn missing_optional_fields_default() {
        let raw = r#"{ "id": "1", "fileUrl": null, "fileName": null }"#;
        let bill: Bill = serde_json::from_str(raw).expect("sparse bill json");
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.date, "");
        assert!(bill.file_url.is_none());
    }
}
