pub mod controller;
pub mod panels;
pub mod store;
pub mod submit;
pub mod validator;

pub use controller::WizardController;
pub use panels::{load_reference_data, price_draft, PanelData, Quote, QuoteLine};
pub use validator::is_step_valid;
