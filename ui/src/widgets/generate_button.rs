use egui::{Button, Response, Ui};
use quickqr_business::{GenerateCompute, ValidationCompute};
use quickqr_states::StateCtx;

use super::start_generation;

/// The generate trigger with its three states: enabled, disabled (blank
/// or invalid input), and in-flight with a spinner.
pub fn generate_button(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let generating = state_ctx
        .cached::<GenerateCompute>()
        .is_some_and(|c| c.is_generating());
    let valid = state_ctx
        .cached::<ValidationCompute>()
        .is_some_and(|v| v.is_valid());

    let label = if generating {
        "Generating…"
    } else {
        "Generate QR Code"
    };

    let response = ui
        .horizontal(|ui| {
            let response = ui.add_enabled(valid && !generating, Button::new(label));
            if generating {
                ui.spinner();
            }
            response
        })
        .inner;

    if response.clicked() {
        start_generation(state_ctx, ui);
    }

    response
}
