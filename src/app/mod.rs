//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the api/domain
//! layers. It owns the analysis lifecycle and the input text.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Actions → Web Request
//!                          ↑                                           ↓
//!                          └──────────── AnalysisSettled ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keys`]: Key binding table
//! - [`phase`]: Lifecycle phase state machine
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod keys;
pub mod phase;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use phase::Phase;
pub use state::WorkflowState;
