//! Typed reactive state layer for the QuickQR app.
//!
//! The view layer stays "dumb": it reads states and computes out of a
//! [`StateCtx`], renders, and dispatches [`Command`]s. Background work
//! publishes results through an [`Updater`], which the context folds back
//! into storage on the next [`StateCtx::sync_computes`] call.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod state;
mod task;
mod time;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use time::Time;
pub use updater::Updater;
