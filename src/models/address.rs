use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAddress {
    pub id: String,
    pub label: Option<String>,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// Inline address entered during the wizard, not yet saved to the
/// customer's address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub instructions: Option<String>,
}
