pub mod address;
pub mod catalog;
pub mod checkout;
pub mod draft;
pub mod schedule;

pub use address::{NewAddress, SavedAddress};
pub use catalog::{Catalog, ServiceCategory, ServiceExtra, ServiceItem};
pub use checkout::{BookingReceipt, CheckoutPhase, CheckoutState, FailureStage};
pub use draft::{BookingDraft, DraftPatch, ExtraLine, ServiceLine, WizardStep};
pub use schedule::BookingWindow;
