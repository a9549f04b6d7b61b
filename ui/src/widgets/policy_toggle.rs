use egui::{Response, Ui};
use quickqr_business::{GeneratorState, UrlPolicy};
use quickqr_states::StateCtx;

/// Switch between the strict URL policy and free-text input.
///
/// Toggling never touches the lifecycle phase; validation is re-derived
/// on the next frame.
pub fn policy_toggle(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let state = state_ctx.state_mut::<GeneratorState>();

    let mut permissive = state.policy == UrlPolicy::Permissive;
    let response = ui
        .checkbox(&mut permissive, "Allow any text")
        .on_hover_text("Skip URL validation and encode the input as-is");

    if response.changed() {
        state.policy = if permissive {
            UrlPolicy::Permissive
        } else {
            UrlPolicy::Strict
        };
    }

    response
}
