use std::any::{Any, TypeId};

use flume::Sender;
use log::debug;

/// Write handle back into a [`crate::StateCtx`].
///
/// Cloneable and `Send`, so delayed tasks can carry it across `await`
/// points. Values sent here are folded into the context on the next
/// `sync_computes()` call; if the context is already gone the value is
/// dropped silently, which makes late task completions a safe no-op.
#[derive(Clone)]
pub struct Updater {
    send: Sender<(TypeId, Box<dyn Any + Send>)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Box<dyn Any + Send>)>) -> Self {
        Self { send }
    }

    /// Publish a replacement value for a state or compute slot.
    pub fn set<T: Any + Send>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            debug!(
                "State context is gone, dropping update for {}",
                std::any::type_name::<T>()
            );
        }
    }
}
