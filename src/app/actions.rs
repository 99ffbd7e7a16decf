//! Side effects requested by the event handler.
//!
//! The handler itself never touches host APIs. It returns [`Action`] values
//! that the plugin shim executes against Zellij after the state transition
//! is done, keeping every transition testable in isolation.

use crate::loader::ResourceKind;

/// A host-side effect to perform after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issue a `web_request` for this catalog resource.
    Fetch(ResourceKind),
    /// Hide the plugin pane.
    CloseFocus,
}
