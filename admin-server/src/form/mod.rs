//! The cycle form collaborator.
//!
//! Owns the mutable flight cycle draft, routes every field edit through
//! explicit recompute/validate calls, and surfaces warnings to the admin.

mod editor;
mod notify;

pub use editor::{CycleEditor, LegField};
pub use notify::{Notifier, ToastBuffer};
