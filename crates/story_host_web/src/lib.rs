//! Browser (`wasm32`) implementations of [`story_host`] host contracts.
//!
//! This crate wires the Telegram Mini App bridging object (`window.Telegram.WebApp`), window
//! navigation for the URI-scheme share fallback, and the page-embedded configuration loader.
//!
//! Bindings live under `bridge/`:
//! - `bridge::interop` (inline-JS bindings on `wasm32`, fallback shim elsewhere)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod config;
pub mod navigation;
pub mod telegram;

pub use adapters::{
    build_share_controller, host_probe, host_strategy_name, navigator, selected_host_strategy,
    HostProbeAdapter, HostStrategy, NavigatorAdapter,
};
pub use config::{load_story_share_config, STORY_SHARE_CONFIG_ELEMENT_ID};
pub use navigation::WebNavigator;
pub use telegram::{TelegramHostProbe, TelegramWebApp};
