use serde::{Deserialize, Serialize};

/// Issuer block printed on invoices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub address: Vec<String>,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
}

/// Bill-to block as entered by the user. Every field defaults so that
/// missing input surfaces as validation messages instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub address: Vec<String>,
    pub tax_number: Option<String>,
    pub country: String,
}
