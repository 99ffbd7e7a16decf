//! Catalog loading pipeline.
//!
//! Loading is split between a pure request/response state machine and the
//! plugin shim that performs the actual host calls:
//!
//! - [`fetch`]: resource descriptions, URL building and context encoding
//! - [`tracker`]: the fan-out/join state machine that assembles the model
//!
//! The shim issues every request the tracker asks for via `web_request` and
//! feeds `WebRequestResult` events back in. Nothing in this module blocks.

pub mod fetch;
pub mod tracker;

pub use fetch::{BaseUrl, ResourceKind};
pub use tracker::{LoadTracker, TrackerStep};
