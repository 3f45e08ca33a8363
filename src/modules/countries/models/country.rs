use serde::Serialize;

use crate::core::CountryCode;

/// Support channels of a country office
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    /// International number without `+`, as used in wa.me links
    pub whatsapp: &'static str,
}

/// A country the business operates in, as shown to chat and invoice users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: CountryCode,
    pub name: &'static str,
    /// ISO 639-1 language of the local office
    pub language: &'static str,
    pub contact: ContactInfo,
    /// Instructions prepended to every chat conversation. Never exposed
    /// over HTTP.
    #[serde(skip)]
    pub system_prompt: &'static str,
    /// Chat completion model used for this country
    pub model: &'static str,
}

impl Country {
    /// `https://wa.me/<number>` link for the country's WhatsApp line
    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.contact.whatsapp)
    }
}
