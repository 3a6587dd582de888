//! Configuration structures for email composition.
//!
//! These are explicit values passed into the composers, never ambient
//! globals; the item parser takes no configuration at all.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NitError, Result};

/// Identity of the bidding company, rendered into outbound emails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyDetails {
    /// Full company name.
    pub name: String,

    /// Postal address.
    pub address: String,

    /// Contact email address.
    pub email: String,

    /// Contact phone number.
    pub phone: String,

    /// Company website.
    pub website: String,
}

impl Default for CompanyDetails {
    fn default() -> Self {
        Self {
            name: "M/S JEETTECNIKA".to_string(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
        }
    }
}

impl CompanyDetails {
    /// Load company details from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| NitError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Details of the tender a BQ request refers to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TenderDetails {
    /// Tender name/title.
    pub tender_name: Option<String>,

    /// Tender reference number.
    pub tender_ref: Option<String>,

    /// Date the tender was issued, as printed on the notice.
    pub issue_date: Option<String>,
}

impl TenderDetails {
    pub(crate) fn name_or_default(&self) -> &str {
        self.tender_name.as_deref().unwrap_or("N/A")
    }

    pub(crate) fn ref_or_default(&self) -> &str {
        self.tender_ref.as_deref().unwrap_or("N/A")
    }

    pub(crate) fn issue_date_or_default(&self) -> &str {
        self.issue_date.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_defaults() {
        let company = CompanyDetails::default();
        assert_eq!(company.name, "M/S JEETTECNIKA");
        assert!(company.email.is_empty());
    }

    #[test]
    fn test_company_from_partial_json() {
        let company: CompanyDetails =
            serde_json::from_str(r#"{"name": "ACME Traders", "phone": "+91 11 2345 6789"}"#)
                .unwrap();
        assert_eq!(company.name, "ACME Traders");
        assert_eq!(company.phone, "+91 11 2345 6789");
        assert!(company.website.is_empty());
    }
}
