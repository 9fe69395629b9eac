use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceItem {
    pub id: String,
    pub category_id: String,
    pub name: String,
    /// Price per unit in minor currency units (e.g. cents).
    pub base_price_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceExtra {
    pub id: String,
    pub name: String,
    pub price_minor: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub categories: Vec<ServiceCategory>,
    pub items: Vec<ServiceItem>,
    pub extras: Vec<ServiceExtra>,
}

impl Catalog {
    pub fn item(&self, id: &str) -> Option<&ServiceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn extra(&self, id: &str) -> Option<&ServiceExtra> {
        self.extras.iter().find(|extra| extra.id == id)
    }
}
