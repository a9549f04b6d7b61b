use std::any::Any;

use log::warn;

/// A piece of application state stored in a [`crate::StateCtx`].
///
/// States are plain data owned by the context. The UI mutates them directly
/// via `StateCtx::state_mut`/`StateCtx::update`; background tasks replace
/// them wholesale through an [`crate::Updater`].
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace this state with a new value delivered through the updater
    /// channel. Implementations normally delegate to [`state_assign_impl`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Default `assign_box` body for [`State`] implementations.
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(new_self) => *this = *new_self,
        Err(_) => warn!(
            "Dropping state update with mismatched type for {}",
            std::any::type_name::<T>()
        ),
    }
}
