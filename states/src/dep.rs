use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, State};

/// Read-only view over the context storage, handed to computes and
/// commands while they run.
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a BTreeMap<TypeId, Box<dyn State>>,
    computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<TypeId, Box<dyn State>>,
        computes: &'a BTreeMap<TypeId, Box<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    /// Borrow a state by type.
    ///
    /// # Panics
    /// Panics if the state type was never added to the context; that is a
    /// wiring bug, not a runtime condition.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Borrow a compute by type.
    ///
    /// # Panics
    /// Panics if the compute type was never recorded in the context.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .unwrap_or_else(|| panic!("Compute {} is not recorded", type_name::<T>()))
    }
}
