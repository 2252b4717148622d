//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the fp-analyzer library and the
//! Zellij plugin system. It owns everything that calls into the host: the
//! permission request, event subscription, `web_request` and `hide_self`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `WorkflowState`
//! 2. **Permission**: Ask for `WebAccess`
//! 3. **Subscribe**: `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Translate host events, delegate to `handle_event`, run actions
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → see `fp_analyzer::map_key`
//! - `WebRequestResult` tagged `request_type=analysis` → `Event::AnalysisSettled`
//! - `PermissionRequestResult` → `WebAccess::resolve`
//!
//! Whether a call is sent, held or failed is decided by
//! `fp_analyzer::api::WebAccess`; this shim only carries out the decision.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use plugin::State;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// The plugin only runs inside Zellij's wasm host.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("fp-analyzer is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use fp_analyzer::api::{is_analysis_context, Dispatch, HttpCall, Settlement, WebAccess};
    use fp_analyzer::{handle_event, map_key, Action, Config, Event, WorkflowState};

    /// Plugin state wrapper.
    pub struct State {
        /// Core workflow state from the library layer.
        app: WorkflowState,

        /// Permission gate for calls to the configured endpoint.
        access: WebAccess,
    }

    impl Default for State {
        fn default() -> Self {
            let config = Config::default();
            Self {
                app: fp_analyzer::initialize(&config),
                access: WebAccess::new(config.endpoint),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            fp_analyzer::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            self.app = fp_analyzer::initialize(&config);
            self.access = WebAccess::new(config.endpoint);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!(endpoint = %self.access.endpoint(), "plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match map_key(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                    if !is_analysis_context(&context) {
                        tracing::debug!(status, "web request result for another context");
                        return false;
                    }
                    Event::AnalysisSettled(Settlement::from_host(status, &headers, body))
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    let granted = matches!(status, PermissionStatus::Granted);
                    return self
                        .access
                        .resolve(granted)
                        .map_or(false, |dispatch| self.carry_out(dispatch));
                }
                _ => return false,
            };

            self.dispatch(&our_event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.app.set_viewport_rows(rows);
            fp_analyzer::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Runs one event through the controller and executes its actions.
        fn dispatch(&mut self, event: &Event) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    let mut render = should_render;
                    for action in actions {
                        render |= self.execute_action(action);
                    }
                    render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        /// Returns `true` if executing the action changed what is on screen.
        fn execute_action(&mut self, action: Action) -> bool {
            match action {
                Action::CloseFocus => {
                    hide_self();
                    false
                }
                Action::SubmitAnalysis(request) => {
                    let dispatch = self.access.submit(&request);
                    self.carry_out(dispatch)
                }
            }
        }

        fn carry_out(&mut self, dispatch: Dispatch) -> bool {
            match dispatch {
                Dispatch::Send(call) => {
                    Self::send(call);
                    false
                }
                Dispatch::Held => false,
                Dispatch::Failed(settlement) => self.dispatch(&Event::AnalysisSettled(settlement)),
            }
        }

        fn send(call: HttpCall) {
            tracing::info!(url = %call.url, body_len = call.body.len(), "sending analysis request");
            web_request(call.url, HttpVerb::Post, call.headers, call.body, call.context);
        }

        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }
    }
}
