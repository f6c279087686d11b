//! Shared transport interop for the Telegram WebApp bridge.
//!
//! Calls route to the `wasm32` implementation in the browser and to a fallback shim elsewhere,
//! so the adapters above this module compile and test on native targets.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm::*;
#[cfg(target_arch = "wasm32")]
pub use wasm::*;
