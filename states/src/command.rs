use crate::{Dep, Updater};

/// A manually dispatched operation.
///
/// Commands are the only place allowed to start side effects (spawning
/// tasks, timers). They read current state through [`Dep`] and publish
/// results via [`Updater::set`]; they never mutate the context directly,
/// which keeps dispatch re-entrant with rendering.
pub trait Command {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
