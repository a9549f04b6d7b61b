use egui::{Align, Layout, Response, RichText, Ui};

/// Cached UI version string to avoid repeated computation
fn ui_version() -> &'static str {
    use std::sync::OnceLock;
    static UI_VERSION: OnceLock<String> = OnceLock::new();
    UI_VERSION.get_or_init(quickqr_utils::version_info::format_version)
}

/// Right-aligned version label in the top bar.
pub fn env_version(ui: &mut Ui) -> Response {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        ui.label(RichText::new(ui_version()).small().weak())
    })
    .inner
}
