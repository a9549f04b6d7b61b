use quickqr_business::{GenerateCompute, GeneratorState, ValidationCompute};
use quickqr_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(GeneratorState::default());
        ctx.record_compute(ValidationCompute::default());
        ctx.record_compute(GenerateCompute::default());

        Self { ctx }
    }
}
