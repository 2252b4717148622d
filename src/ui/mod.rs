//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! rendering components, with theme and language support.
//!
//! # Architecture
//!
//! ```text
//! WorkflowState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cell-width aware text utilities
//! - [`locale`]: Japanese and English label sets
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod locale;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use locale::{Labels, Locale};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    AlertInfo, FooterInfo, HeaderInfo, InputBoxInfo, ProgressInfo, ResultRow, ResultsCard,
    TriggerInfo, UIViewModel,
};
