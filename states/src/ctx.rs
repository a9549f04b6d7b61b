use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use flume::{Receiver, Sender};

use crate::{Compute, Dep, Error, State, Updater};

/// Owner of all states and computes, plus the channel that delayed work
/// reports back through.
///
/// Per-frame protocol (see the UI crate's `update` loop):
/// 1. `sync_computes()`: fold pending channel messages into storage,
/// 2. render, reading via `state`/`cached` and dispatching commands,
/// 3. `run_computed()`: let computes refresh derived values.
pub struct StateCtx {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
    recv: Receiver<(TypeId, Box<dyn Any + Send>)>,

    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    /// Borrow a state by type. Panics when the type was never added; that
    /// is a wiring bug caught by the integration tests.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Mutate a state in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Read a compute's cached value, `None` until it was recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        self.cached::<T>()
            .ok_or_else(|| Error::compute_not_found(TypeId::of::<T>(), type_name::<T>()))
    }

    /// Run a command against the current storage.
    pub fn dispatch<C: crate::Command>(&self, command: C) {
        command.run(Dep::new(&self.states, &self.computes), self.updater());
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Fold all pending updater messages into storage. Call before render
    /// so the frame observes a consistent snapshot.
    pub fn sync_computes(&mut self) {
        while let Ok((type_id, boxed)) = self.recv.try_recv() {
            if let Some(compute) = self.computes.get_mut(&type_id) {
                compute.assign_box(boxed);
            } else if let Some(state) = self.states.get_mut(&type_id) {
                state.assign_box(boxed);
            } else {
                log::warn!("Dropping update for unregistered slot {type_id:?}");
            }
        }
    }

    /// Give every compute a chance to refresh itself. Computes guard
    /// internally against redundant work, so calling this each frame is
    /// cheap.
    pub fn run_computed(&self) {
        let deps = Dep::new(&self.states, &self.computes);
        let updater = self.updater();
        for compute in self.computes.values() {
            compute.compute(deps, updater.clone());
        }
    }
}
