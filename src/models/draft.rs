use serde::{Deserialize, Serialize};

use crate::models::NewAddress;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Services,
    Schedule,
    Address,
    Review,
    Payment,
}

pub const STEP_SEQUENCE: [WizardStep; 5] = [
    WizardStep::Services,
    WizardStep::Schedule,
    WizardStep::Address,
    WizardStep::Review,
    WizardStep::Payment,
];

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Services => "services",
            WizardStep::Schedule => "schedule",
            WizardStep::Address => "address",
            WizardStep::Review => "review",
            WizardStep::Payment => "payment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "services" => Some(WizardStep::Services),
            "schedule" => Some(WizardStep::Schedule),
            "address" => Some(WizardStep::Address),
            "review" => Some(WizardStep::Review),
            "payment" => Some(WizardStep::Payment),
            _ => None,
        }
    }

    pub fn position(&self) -> usize {
        STEP_SEQUENCE
            .iter()
            .position(|step| step == self)
            .unwrap_or(0)
    }

    pub fn next(&self) -> Option<Self> {
        STEP_SEQUENCE.get(self.position() + 1).copied()
    }

    pub fn prev(&self) -> Option<Self> {
        self.position().checked_sub(1).map(|i| STEP_SEQUENCE[i])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceLine {
    pub service_item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraLine {
    pub service_extra_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDraft {
    pub services: Vec<ServiceLine>,
    pub extras: Vec<ExtraLine>,
    pub service_date: String,
    pub service_time: String,
    pub address_id: Option<String>,
    pub new_address: Option<NewAddress>,
    pub notes: Option<String>,
    pub current_step: WizardStep,
    pub is_guest: bool,
}

impl BookingDraft {
    pub fn new(is_guest: bool) -> Self {
        Self {
            services: Vec::new(),
            extras: Vec::new(),
            service_date: String::new(),
            service_time: String::new(),
            address_id: None,
            new_address: None,
            notes: None,
            current_step: WizardStep::Services,
            is_guest,
        }
    }
}

/// Shallow-merge payload for a single form update. Absent fields leave the
/// draft untouched; `services`/`extras` entries merge by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub services: Option<Vec<ServiceLine>>,
    pub extras: Option<Vec<ExtraLine>>,
    pub service_date: Option<String>,
    pub service_time: Option<String>,
    pub address_id: Option<String>,
    pub new_address: Option<NewAddress>,
    pub notes: Option<String>,
}
