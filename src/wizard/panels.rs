use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::schedule::slot_grid;
use crate::models::{BookingDraft, BookingWindow, Catalog, SavedAddress, WizardStep};
use crate::services::{AddressProvider, AvailabilityProvider, CatalogProvider};

/// One priced line of the quote, resolved against the current catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    pub id: String,
    pub name: String,
    pub unit_minor: i64,
    pub quantity: u32,
    pub subtotal_minor: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub total_minor: i64,
}

/// Prices the draft against current catalog prices. The draft never caches
/// prices, so a catalog change between steps shows up here immediately.
/// Lines referencing ids the catalog no longer carries are skipped.
pub fn price_draft(catalog: &Catalog, draft: &BookingDraft) -> Quote {
    let mut quote = Quote::default();

    for line in &draft.services {
        let Some(item) = catalog.item(&line.service_item_id) else {
            tracing::warn!(id = %line.service_item_id, "draft references unknown service item");
            continue;
        };
        let subtotal = item.base_price_minor * i64::from(line.quantity);
        quote.lines.push(QuoteLine {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_minor: item.base_price_minor,
            quantity: line.quantity,
            subtotal_minor: subtotal,
        });
        quote.total_minor += subtotal;
    }

    for line in &draft.extras {
        let Some(extra) = catalog.extra(&line.service_extra_id) else {
            tracing::warn!(id = %line.service_extra_id, "draft references unknown service extra");
            continue;
        };
        let subtotal = extra.price_minor * i64::from(line.quantity);
        quote.lines.push(QuoteLine {
            id: extra.id.clone(),
            name: extra.name.clone(),
            unit_minor: extra.price_minor,
            quantity: line.quantity,
            subtotal_minor: subtotal,
        });
        quote.total_minor += subtotal;
    }

    quote
}

/// Reference data for one step panel, loaded explicitly when the client
/// renders that step. Collaborator failures bubble up as errors for the
/// handler to surface with a retry affordance; they never touch the draft.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum PanelData {
    Services {
        catalog: Catalog,
    },
    Schedule {
        window: BookingWindow,
        slots: Vec<String>,
    },
    Address {
        saved_addresses: Vec<SavedAddress>,
    },
    Review {
        quote: Quote,
    },
    Payment {
        amount_minor_units: i64,
    },
}

pub async fn load_reference_data(
    catalog: &dyn CatalogProvider,
    addresses: &dyn AddressProvider,
    availability: &dyn AvailabilityProvider,
    draft: &BookingDraft,
    customer_ref: &str,
    today: NaiveDate,
) -> anyhow::Result<PanelData> {
    match draft.current_step {
        WizardStep::Services => {
            let catalog = catalog.fetch_catalog().await?;
            Ok(PanelData::Services { catalog })
        }
        WizardStep::Schedule => {
            let window = BookingWindow::from_today(today);
            let slots = match chosen_date(draft) {
                Some(date) => {
                    let unavailable = availability.unavailable_slots(date).await?;
                    slot_grid()
                        .into_iter()
                        .filter(|slot| !unavailable.contains(slot))
                        .collect()
                }
                None => slot_grid(),
            };
            Ok(PanelData::Schedule { window, slots })
        }
        WizardStep::Address => {
            let saved_addresses = if draft.is_guest {
                Vec::new()
            } else {
                addresses.list_addresses(customer_ref).await?
            };
            Ok(PanelData::Address { saved_addresses })
        }
        WizardStep::Review => {
            let catalog = catalog.fetch_catalog().await?;
            Ok(PanelData::Review {
                quote: price_draft(&catalog, draft),
            })
        }
        WizardStep::Payment => {
            let catalog = catalog.fetch_catalog().await?;
            Ok(PanelData::Payment {
                amount_minor_units: price_draft(&catalog, draft).total_minor,
            })
        }
    }
}

fn chosen_date(draft: &BookingDraft) -> Option<NaiveDate> {
    if draft.service_date.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(&draft.service_date, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(date = %draft.service_date, "unparsable service date on draft");
            None
        }
    }
}
