//! Application layer: state, events and transitions.
//!
//! The flow is unidirectional. The plugin shim maps host input to
//! [`AppEvent`] values, [`handler::handle_event`] applies them to
//! [`AppState`] and hands back [`Action`] side effects, and rendering reads
//! the resulting state through an immutable projection.
//!
//! # Organization
//!
//! - [`state`]: the central [`AppState`]
//! - [`handler`]: event definitions and the transition function
//! - [`modes`]: load phase, status filter and overlay state
//! - [`stats`]: header counters
//! - [`actions`]: side effects the shim executes

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod stats;

pub use actions::Action;
pub use handler::{handle_event, AppEvent};
pub use modes::{LoadPhase, ModalState, StatusFilter};
pub use state::AppState;
pub use stats::{compute_stats, LibraryStats};
