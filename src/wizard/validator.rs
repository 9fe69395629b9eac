use crate::models::{BookingDraft, WizardStep};

/// Gate for forward navigation. Pure; consulted before every forward
/// transition. Review and Payment never block — review is informational and
/// payment-specific checks belong to the payment gateway.
pub fn is_step_valid(step: WizardStep, draft: &BookingDraft) -> bool {
    match step {
        WizardStep::Services => !draft.services.is_empty(),
        WizardStep::Schedule => !draft.service_date.is_empty() && !draft.service_time.is_empty(),
        WizardStep::Address => draft.address_id.is_some() || draft.new_address.is_some(),
        WizardStep::Review | WizardStep::Payment => true,
    }
}
