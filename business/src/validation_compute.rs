//! Derived validation result for the current input.
//!
//! Recomputed whenever the input or the policy changed since the last
//! pass; the guard keeps the per-frame `run_computed` cheap.

use std::any::{Any, TypeId};

use quickqr_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};

use crate::{GeneratorState, UrlPolicy, validate};

/// Inline error shown under the input field in strict mode.
const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://google.com)";

#[derive(Debug, Default)]
pub struct ValidationCompute {
    /// `(input, policy)` the cached result was derived from.
    checked: Option<(String, UrlPolicy)>,
    valid: bool,
}

impl ValidationCompute {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Inline message for the user, only when there is something to say:
    /// non-empty input that fails the active policy.
    pub fn message(&self) -> Option<&'static str> {
        match &self.checked {
            Some((input, _)) if !self.valid && !input.trim().is_empty() => {
                Some(INVALID_URL_MESSAGE)
            }
            _ => None,
        }
    }
}

impl Compute for ValidationCompute {
    fn deps(&self) -> ComputeDeps {
        const IDS: [TypeId; 1] = [TypeId::of::<GeneratorState>()];
        (&IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let state = deps.get_state_ref::<GeneratorState>();
        let key = (state.input.clone(), state.policy);
        if self.checked.as_ref() == Some(&key) {
            return;
        }

        let valid = validate(&state.input, state.policy);
        updater.set(ValidationCompute {
            checked: Some(key),
            valid,
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
