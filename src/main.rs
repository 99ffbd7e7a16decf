//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the Bookrack library and the Zellij
//! plugin system. It implements the `ZellijPlugin` trait, translates Zellij
//! events into library events, and executes the actions the library hands
//! back.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: request `WebAccess` and wait for the grant
//! 3. **Initial fetch**: issue the status and index requests concurrently
//! 4. **Update**: route keys and `WebRequestResult` events to the library
//! 5. **Render**: delegate to the library render function
//!
//! # Event Mapping
//!
//! - `Key(Down/j)` → `AppEvent::MoveDown`, `Key(Up/k)` → `AppEvent::MoveUp`
//! - `Key(1-4)` or `a/r/c/t` → `AppEvent::SetFilter(..)`
//! - `Key(Enter)` → open the detail overlay, or close it when already open
//! - `Key(Esc)` → `AppEvent::Escape` (closes the overlay, no-op otherwise)
//! - `Key(q)` → close the overlay if open, otherwise hide the plugin
//! - `WebRequestResult` → `AppEvent::ResourceLoaded` via the request context

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookrack::{handle_event, Action, AppEvent, BaseUrl, Config, LoadTracker, ResourceKind};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific pieces: the
/// resolved catalog base URL and the host calls the library must not know
/// about.
struct State {
    app: bookrack::AppState,
    base: BaseUrl,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: bookrack::initialize(&config),
            base: BaseUrl::new(&config.base_url),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, requests the `WebAccess`
    /// permission and subscribes to events. The initial fetches wait for
    /// the permission grant.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookrack::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(base_url = %config.base_url, "plugin loading started");
        self.app = bookrack::initialize(&config);
        self.base = BaseUrl::new(&config.base_url);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if
    /// the UI should re-render.
    fn update(&mut self, event: Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            Event::WebRequestResult(status, _headers, body, context) => {
                match ResourceKind::from_context(&context) {
                    Some(resource) => AppEvent::ResourceLoaded {
                        resource,
                        http_status: status,
                        body,
                    },
                    None => {
                        tracing::debug!("web request result with foreign context, ignoring");
                        return false;
                    }
                }
            }
            Event::PermissionRequestResult(permissions) => {
                return self.handle_permission_result(permissions);
            }
            _ => return false,
        };

        match handle_event(&mut self.app, our_event) {
            Ok((should_render, actions)) => {
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookrack::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &Event) -> String {
        match event {
            Event::Key(key) => format!("Key({:?})", key.bare_key),
            Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// Enter and `q` depend on whether the detail overlay is open: Enter
    /// toggles between opening and closing it, `q` closes it or hides the
    /// plugin.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<AppEvent> {
        use bookrack::StatusFilter;

        let overlay_open = matches!(self.app.modal, bookrack::ModalState::Open(_));

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => AppEvent::MoveDown,
            BareKey::Up | BareKey::Char('k') => AppEvent::MoveUp,
            BareKey::Enter if overlay_open => AppEvent::CloseDetail,
            BareKey::Enter => AppEvent::OpenDetail,
            BareKey::Esc => AppEvent::Escape,
            BareKey::Char('q') if overlay_open => AppEvent::CloseDetail,
            BareKey::Char('q') => AppEvent::CloseFocus,
            BareKey::Char('1') | BareKey::Char('a') => AppEvent::SetFilter(StatusFilter::All),
            BareKey::Char('2') | BareKey::Char('r') => AppEvent::SetFilter(StatusFilter::Reading),
            BareKey::Char('3') | BareKey::Char('c') => AppEvent::SetFilter(StatusFilter::Completed),
            BareKey::Char('4') | BareKey::Char('t') => AppEvent::SetFilter(StatusFilter::ToRead),
            _ => return None,
        })
    }

    /// Issues the initial catalog fetches once web access is granted.
    fn handle_permission_result(&self, permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - fetching catalog");
                for resource in LoadTracker::initial_requests() {
                    self.fetch(&resource);
                }
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - cannot load the library");
                false
            }
        }
    }

    /// Issues one `web_request` host call for a catalog resource.
    ///
    /// The resource is encoded into the request context so the asynchronous
    /// result can be routed back through `ResourceKind::from_context`.
    fn fetch(&self, resource: &ResourceKind) {
        let url = self.base.url_for(resource);
        tracing::debug!(url = %url, "issuing web request");
        web_request(
            url,
            HttpVerb::Get,
            BTreeMap::new(),
            Vec::new(),
            resource.to_context(),
        );
    }

    /// Executes an action returned from event handling.
    fn execute_action(&self, action: &Action) {
        match action {
            Action::Fetch(resource) => self.fetch(resource),
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
