//! Generation request lifecycle.
//!
//! The lifecycle is a command-driven compute:
//!
//! - UI dispatches [`GenerateCommand`] (button click or Enter)
//! - the command snapshots the input, flips the compute to `Generating`,
//!   and spawns a cancellable delay task
//! - the task flips the compute to `Displayed` through the updater channel
//! - UI reads via `ctx.cached::<GenerateCompute>()`
//!
//! Every transition bumps a generation counter. Completions carrying an
//! older generation are ignored in `assign_box`, so a task that outlives a
//! newer submission (or a reset) is a harmless no-op. Dropping the compute
//! cancels whatever is still pending, which covers app teardown.
//!
//! Generations are claimed through a shared atomic counter, not the value
//! folded in by the last sync. Commands observe the context through `Dep`,
//! which lags the channel by up to a frame, so two dispatches in the same
//! frame would otherwise both see `Idle` and both snapshot. The atomic
//! claim is synchronous: the second dispatch fails it and is refused.

use std::any::{Any, TypeId};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, info, warn};
use quickqr_states::{
    Command, Compute, ComputeDeps, Dep, State, TaskHandle, TaskId, Time, Updater,
    state_assign_impl,
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{GeneratorState, validate};

/// Simulated generation delay before the QR code is shown.
pub const GENERATION_DELAY: Duration = Duration::from_millis(400);

/// Where the screen is in the generate-request lifecycle.
///
/// The `text` payload is the submitted snapshot: further typing does not
/// touch it until the next submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenerationPhase {
    /// Nothing submitted.
    #[default]
    Idle,

    /// Submission accepted, delay task running.
    Generating { text: String },

    /// Delay elapsed; the QR image for `text` should be on screen.
    Displayed { text: String },
}

/// Lifecycle machine for QR generation.
#[derive(Debug, Default)]
pub struct GenerateCompute {
    phase: GenerationPhase,
    generation: u64,
    pending: Option<TaskHandle>,

    /// Highest generation handed out to any dispatch so far. Shared by
    /// every value this compute is replaced with, so commands can claim
    /// the next generation synchronously instead of trusting the (possibly
    /// stale) `generation` folded in by the last sync.
    issued: Arc<AtomicU64>,
}

impl GenerateCompute {
    pub fn phase(&self) -> &GenerationPhase {
        &self.phase
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, GenerationPhase::Generating { .. })
    }

    pub fn is_displayed(&self) -> bool {
        matches!(self.phase, GenerationPhase::Displayed { .. })
    }

    /// The snapshot taken at submit time, in `Generating` and `Displayed`.
    pub fn submitted_text(&self) -> Option<&str> {
        match &self.phase {
            GenerationPhase::Idle => None,
            GenerationPhase::Generating { text } | GenerationPhase::Displayed { text } => {
                Some(text)
            }
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn pending_handle(&self) -> Option<&TaskHandle> {
        self.pending.as_ref()
    }
}

impl Drop for GenerateCompute {
    fn drop(&mut self) {
        // Covers teardown mid-delay and replacement by a newer value.
        if let Some(handle) = &self.pending {
            handle.cancel();
        }
    }
}

impl Compute for GenerateCompute {
    fn deps(&self) -> ComputeDeps {
        // Updated explicitly by commands; no derived dependencies.
        (&[], &[])
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Intentionally no-op.
        //
        // Side effects (the delay task) must not run inside a compute due
        // to implicit execution. Dispatch `GenerateCommand` instead.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        match new_self.downcast::<Self>() {
            Ok(new_self) => {
                if new_self.generation < self.generation {
                    debug!(
                        "Ignoring stale generation update ({} < {})",
                        new_self.generation, self.generation
                    );
                    return;
                }
                *self = *new_self;
            }
            Err(_) => warn!("Dropping generation update with mismatched type"),
        }
    }
}

impl State for GenerateCompute {
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

/// Snapshot the input and start a (re)generation.
///
/// Guards, in order: an in-flight generation wins (double-submit is a
/// no-op); blank input is refused; input failing the active policy is
/// refused; a generation already claimed since the last sync means
/// another dispatch in this frame won. The UI disables the trigger for
/// the first three, so hitting a guard here only happens through
/// programmatic dispatch.
pub struct GenerateCommand {
    repaint: egui::Context,
}

impl GenerateCommand {
    pub fn new(repaint: egui::Context) -> Self {
        Self { repaint }
    }
}

impl Command for GenerateCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let state = deps.get_state_ref::<GeneratorState>();
        let compute = deps.get_compute_ref::<GenerateCompute>();

        if compute.is_generating() {
            debug!("Generation already in flight, ignoring submit");
            return;
        }

        if state.input.trim().is_empty() {
            warn!("GenerateCommand: refusing blank input");
            return;
        }

        if !validate(&state.input, state.policy) {
            warn!(
                "GenerateCommand: input failed {:?} validation, refusing",
                state.policy
            );
            return;
        }

        // Claim the next generation. The compare-exchange fails when some
        // dispatch already claimed it since the last sync, which is the
        // same-frame double submit the phase check above cannot see yet.
        let generation = compute.generation() + 1;
        if compute
            .issued
            .compare_exchange(
                compute.generation(),
                generation,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_err()
        {
            debug!("Generation {generation} already claimed this frame, ignoring submit");
            return;
        }

        // Supersede a displayed result: cancel whatever might still be
        // pending; the generation bump invalidates older completions.
        if let Some(handle) = compute.pending_handle() {
            handle.cancel();
        }

        let text = state.input.trim().to_owned();
        let token = CancellationToken::new();
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<GenerateCompute>(), generation),
            token.clone(),
        );

        let now = deps.get_state_ref::<Time>();
        info!("Generating QR code for: {text} at {:?}", now.as_ref());
        let issued = Arc::clone(&compute.issued);
        updater.set(GenerateCompute {
            phase: GenerationPhase::Generating { text: text.clone() },
            generation,
            pending: Some(handle),
            issued: Arc::clone(&issued),
        });

        let repaint = self.repaint.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Generation {generation} cancelled before completion");
                }
                _ = tokio::time::sleep(GENERATION_DELAY) => {
                    updater.set(GenerateCompute {
                        phase: GenerationPhase::Displayed { text },
                        generation,
                        pending: None,
                        issued,
                    });
                    repaint.request_repaint();
                }
            }
        });
    }
}

/// Return the lifecycle to `Idle`, cancelling any pending delay.
///
/// Dispatched on clear and on render failure, so the user is never stuck
/// in a "displayed" phase with nothing on screen.
pub struct ResetGenerationCommand;

impl Command for ResetGenerationCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let compute = deps.get_compute_ref::<GenerateCompute>();

        if let Some(handle) = compute.pending_handle() {
            handle.cancel();
        }

        // Unconditional claim: a reset outranks even a submit dispatched
        // earlier in the same frame, whose completion the bumped
        // generation will discard.
        let generation = compute.issued.fetch_add(1, Ordering::SeqCst) + 1;
        updater.set(GenerateCompute {
            phase: GenerationPhase::Idle,
            generation,
            pending: None,
            issued: Arc::clone(&compute.issued),
        });
    }
}
