//! Singleton business profile shown on generated invoices.

use serde::{Deserialize, Serialize};

const DEFAULT_BUSINESS_NAME: &str = "CleanSweep Pro";
const DEFAULT_BUSINESS_ADDRESS: &str = "123 Cleaning Ave.\nSuite 100\nAnytown, USA 12345";

/// Exactly one instance exists; it is only ever replaced in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    /// Multi-line postal address.
    pub address: String,
    /// Image encoded as text (data URL or base64); empty when unset.
    #[serde(default)]
    pub logo: String,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUSINESS_NAME.to_string(),
            address: DEFAULT_BUSINESS_ADDRESS.to_string(),
            logo: String::new(),
        }
    }
}

impl BusinessInfo {
    pub fn address_lines(&self) -> impl Iterator<Item = &str> {
        self.address.lines().map(str::trim).filter(|line| !line.is_empty())
    }
}
