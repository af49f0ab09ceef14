//! Keystroke feedback for the registration page.
//!
//! `on_input` is the pure part of the page's input handlers: given the field
//! that just changed and the current form values, it says how to redraw
//! that field, whether the password checklist needs redrawing, and whether
//! the submit button should be enabled.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::form::{FormReport, RegistrationInput};
use crate::password::PasswordRequirements;
use crate::phone::format_phone_mask;

/// What the host should update after a field changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFeedback {
    /// The field that changed
    pub field: Field,
    /// Whether that field is now valid
    pub valid: bool,
    /// Checklist to redraw, if the change affects the password
    pub requirements: Option<PasswordRequirements>,
    /// Value to write back into the phone input
    pub masked_phone: Option<String>,
    /// Whether the submit control should be enabled
    pub submit_enabled: bool,
}

/// Computes the feedback for an edit of `field`.
///
/// A phone edit is masked first and validated in its masked form. Edits to
/// the full name, email or username redraw the password checklist only
/// when a password has already been typed.
pub fn on_input(field: Field, input: &RegistrationInput) -> FieldFeedback {
    let masked_phone = (field == Field::Phone).then(|| format_phone_mask(&input.phone));

    let report = match &masked_phone {
        Some(masked) => {
            let mut masked_input = input.clone();
            masked_input.phone = masked.clone();
            FormReport::evaluate(&masked_input)
        }
        None => FormReport::evaluate(input),
    };

    let redraw_checklist = match field {
        Field::Password1 => true,
        f if f.affects_password() => !input.password1.is_empty(),
        _ => false,
    };

    let feedback = FieldFeedback {
        field,
        valid: report.field(field),
        requirements: redraw_checklist.then_some(report.password),
        masked_phone,
        submit_enabled: report.is_valid(),
    };

    tracing::trace!(
        field = %field,
        valid = feedback.valid,
        redraw_checklist,
        submit_enabled = feedback.submit_enabled,
        "field input handled"
    );

    feedback
}
