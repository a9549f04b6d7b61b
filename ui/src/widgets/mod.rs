mod generate_button;
mod policy_toggle;
mod qr_display;
mod url_input;
mod version;

pub use generate_button::generate_button;
pub use policy_toggle::policy_toggle;
pub use qr_display::qr_display;
pub use url_input::url_input;
pub use version::env_version;

use egui::Ui;
use quickqr_business::{GenerateCommand, GeneratorState};
use quickqr_states::StateCtx;

/// Shared submit path for the button and the Enter key: drop whatever was
/// rendered for the previous submission and dispatch a generation.
///
/// Validation and the in-flight guard live in the command; this only runs
/// when the trigger was enabled.
pub(crate) fn start_generation(state_ctx: &mut StateCtx, ui: &Ui) {
    state_ctx.state_mut::<GeneratorState>().drop_rendered();
    state_ctx.dispatch(GenerateCommand::new(ui.ctx().clone()));
}
