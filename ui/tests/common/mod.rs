use egui_kittest::Harness;
use quickqr_business::GeneratorState;
use quickqr_ui::QuickqrApp;
use quickqr_ui::state::State;

/// Build a full-app harness around a fresh state context.
pub fn new_harness<'a>() -> Harness<'a, QuickqrApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    let app = QuickqrApp::new(State::default());
    Harness::new_eframe(|_| app)
}

/// Set the input text directly on the state.
///
/// This is equivalent to typing into the text field; driving the OS-level
/// text events through kittest adds nothing for these tests.
pub fn set_input(harness: &mut Harness<'_, QuickqrApp>, text: &str) {
    harness
        .state_mut()
        .state
        .ctx
        .update::<GeneratorState>(|s| s.input = text.to_owned());
}

/// Run a few frames so queued events, compute refreshes, and channel
/// messages all settle.
pub fn step_frames(harness: &mut Harness<'_, QuickqrApp>, frames: usize) {
    for _ in 0..frames {
        harness.step();
    }
}
