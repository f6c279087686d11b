//! Telegram WebApp bridge bindings for `story_host_web` adapters.
//!
//! This module keeps a stable crate-internal API over the `wasm32` inline-JS bindings and the
//! non-wasm fallback shim in `interop`.

mod interop;

use story_host::{MainButtonHandler, StoryShareParams};

pub fn telegram_present() -> bool {
    interop::telegram_present()
}

pub fn telegram_ready() -> Result<(), String> {
    interop::telegram_ready()
}

pub fn telegram_expand() -> Result<(), String> {
    interop::telegram_expand()
}

pub fn telegram_supports_story_share() -> bool {
    interop::telegram_supports_story_share()
}

pub fn telegram_share_to_story(media_url: &str, params: &StoryShareParams) -> Result<(), String> {
    interop::telegram_share_to_story(media_url, params)
}

pub fn telegram_show_main_button(text: &str) -> Result<(), String> {
    interop::telegram_show_main_button(text)
}

pub fn telegram_on_main_button_click(handler: MainButtonHandler) -> Result<(), String> {
    interop::telegram_on_main_button_click(handler)
}

pub fn telegram_platform() -> Option<String> {
    interop::telegram_platform()
}

pub fn navigate(url: &str) -> Result<(), String> {
    interop::navigate(url)
}

pub fn embedded_text(element_id: &str) -> Option<String> {
    interop::embedded_text(element_id)
}
