use std::any::{Any, TypeId};

use log::warn;

use crate::{Dep, Updater};

/// Dependency declaration for a compute: `(state ids, compute ids)`.
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A derived or cached value stored alongside states in a
/// [`crate::StateCtx`].
///
/// `compute` runs once per frame (after render) and must decide internally
/// whether there is work to do; it reads its declared dependencies through
/// [`Dep`] and publishes a replacement of itself through the [`Updater`].
///
/// Computes that are driven purely by [`crate::Command`]s keep `compute` a
/// no-op: side effects must not run inside a compute because computes
/// execute implicitly.
pub trait Compute: Any + Send {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    /// Fold a value delivered through the updater channel into this slot.
    /// Implementations normally delegate to [`assign_impl`]; overriding
    /// allows dropping stale updates (see the generation guard in the
    /// business crate).
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body for [`Compute`] implementations.
pub fn assign_impl<T: Compute>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => warn!(
            "Dropping compute update with mismatched type for {}",
            std::any::type_name::<T>()
        ),
    }
}
