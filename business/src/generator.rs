//! Screen state for the generator view.
//!
//! This lives in `quickqr_business` so UI code can remain "dumb": the UI
//! reads this state, renders, and dispatches commands; the lifecycle rules
//! live in `generate_compute`.
//!
//! The state intentionally contains UI-affine data such as
//! `egui::TextureHandle`, because the cached QR texture is part of what
//! the screen owns.

use std::any::Any;

use egui::TextureHandle;
use quickqr_states::{State, state_assign_impl};

use crate::{UrlPolicy, validate};

/// State backing the single generator screen.
#[derive(Default)]
pub struct GeneratorState {
    /// Raw user-entered text, mutated on every keystroke.
    pub input: String,

    /// Active validation policy, switchable at runtime.
    pub policy: UrlPolicy,

    /// Cached texture rendered from the submitted text. Dropped on clear
    /// and on every new submission.
    pub qr_texture: Option<TextureHandle>,

    /// Message shown when the QR renderer itself failed.
    pub render_error: Option<String>,
}

impl std::fmt::Debug for GeneratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorState")
            .field("input", &self.input)
            .field("policy", &self.policy)
            .field("qr_texture", &self.qr_texture.is_some())
            .field("render_error", &self.render_error)
            .finish()
    }
}

impl State for GeneratorState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

impl GeneratorState {
    /// Whether the current input passes the active policy.
    pub fn is_input_valid(&self) -> bool {
        validate(&self.input, self.policy)
    }

    /// Drop everything derived from a previous submission. Called by the
    /// UI right before dispatching a new generation and on clear.
    pub fn drop_rendered(&mut self) {
        self.qr_texture = None;
        self.render_error = None;
    }

    /// Clear affordance: empty the input and everything rendered from it.
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.drop_rendered();
    }
}
