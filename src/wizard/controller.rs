use crate::models::{BookingDraft, DraftPatch, ExtraLine, ServiceLine, WizardStep};
use crate::wizard::validator::is_step_valid;

/// Single authority for draft mutation and step transitions. All operations
/// are synchronous and local; transitions whose preconditions fail are
/// silently rejected, so callers disable the corresponding actions instead
/// of inspecting a result.
#[derive(Debug)]
pub struct WizardController {
    draft: BookingDraft,
}

impl WizardController {
    pub fn new(draft: BookingDraft) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn into_draft(self) -> BookingDraft {
        self.draft
    }

    /// Shallow-merges `patch` into the draft. Service and extra lines merge
    /// entry-wise by id: a positive quantity replaces the existing line, a
    /// zero quantity removes it. Setting one address source drops the other
    /// so at most one is ever populated.
    pub fn update_form_data(&mut self, patch: DraftPatch) {
        if let Some(lines) = patch.services {
            for line in lines {
                merge_service_line(&mut self.draft.services, line);
            }
        }
        if let Some(lines) = patch.extras {
            for line in lines {
                merge_extra_line(&mut self.draft.extras, line);
            }
        }
        if let Some(date) = patch.service_date {
            self.draft.service_date = date;
        }
        if let Some(time) = patch.service_time {
            self.draft.service_time = time;
        }
        if let Some(address_id) = patch.address_id {
            self.draft.address_id = Some(address_id);
            self.draft.new_address = None;
        }
        if let Some(new_address) = patch.new_address {
            self.draft.new_address = Some(new_address);
            self.draft.address_id = None;
        }
        if let Some(notes) = patch.notes {
            self.draft.notes = Some(notes);
        }
    }

    pub fn next_step(&mut self) {
        if !is_step_valid(self.draft.current_step, &self.draft) {
            return;
        }
        if let Some(next) = self.draft.current_step.next() {
            self.draft.current_step = next;
        }
    }

    pub fn prev_step(&mut self) {
        if let Some(prev) = self.draft.current_step.prev() {
            self.draft.current_step = prev;
        }
    }

    /// Backward jumps only; a target ahead of the current step is rejected
    /// so direct navigation cannot skip un-validated steps.
    pub fn go_to_step(&mut self, target: WizardStep) {
        if target.position() <= self.draft.current_step.position() {
            self.draft.current_step = target;
        }
    }

    /// Fresh empty draft at the first step. The session keeps its guest
    /// flag; it was fixed when the visitor entered the flow.
    pub fn clear_draft(&mut self) {
        self.draft = BookingDraft::new(self.draft.is_guest);
    }
}

fn merge_service_line(lines: &mut Vec<ServiceLine>, incoming: ServiceLine) {
    let existing = lines
        .iter()
        .position(|line| line.service_item_id == incoming.service_item_id);
    match (existing, incoming.quantity) {
        (Some(i), 0) => {
            lines.remove(i);
        }
        (Some(i), _) => lines[i].quantity = incoming.quantity,
        (None, 0) => {}
        (None, _) => lines.push(incoming),
    }
}

fn merge_extra_line(lines: &mut Vec<ExtraLine>, incoming: ExtraLine) {
    let existing = lines
        .iter()
        .position(|line| line.service_extra_id == incoming.service_extra_id);
    match (existing, incoming.quantity) {
        (Some(i), 0) => {
            lines.remove(i);
        }
        (Some(i), _) => lines[i].quantity = incoming.quantity,
        (None, 0) => {}
        (None, _) => lines.push(incoming),
    }
}
