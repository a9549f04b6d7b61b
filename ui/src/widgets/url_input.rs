use egui::{Key, Response, TextEdit, Ui};
use quickqr_business::{GenerateCompute, GeneratorState, ResetGenerationCommand, ValidationCompute};
use quickqr_states::StateCtx;

use crate::utils::colors::COLOR_RED;

use super::start_generation;

/// Text input row: the URL/text field, a clear button while there is
/// input, and the inline validation message.
///
/// Enter submits, same as the generate button; clear resets the whole
/// lifecycle back to idle.
pub fn url_input(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let message = state_ctx
        .cached::<ValidationCompute>()
        .and_then(|v| v.message());
    let can_submit = state_ctx
        .cached::<ValidationCompute>()
        .is_some_and(|v| v.is_valid())
        && !state_ctx
            .cached::<GenerateCompute>()
            .is_some_and(|c| c.is_generating());

    let mut submit = false;
    let mut clear = false;

    let state = state_ctx.state_mut::<GeneratorState>();
    let response = ui
        .horizontal(|ui| {
            let edit = ui.add(
                TextEdit::singleline(&mut state.input)
                    .hint_text("https://google.com")
                    .desired_width(280.0),
            );
            if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit = true;
            }

            if !state.input.is_empty() {
                let cleared = ui.button("✖").on_hover_text("Clear").clicked();
                if cleared {
                    clear = true;
                }
            }

            edit
        })
        .inner;

    if let Some(message) = message {
        ui.colored_label(COLOR_RED, message);
    }

    if clear {
        state_ctx.state_mut::<GeneratorState>().clear_input();
        state_ctx.dispatch(ResetGenerationCommand);
    } else if submit && can_submit {
        start_generation(state_ctx, ui);
    }

    response
}
