//! Telegram WebApp host-bridge adapter and global-context probe.

use std::{cell::OnceCell, rc::Rc};

use leptos::logging;
use story_host::{HostBridge, HostHandle, HostProbe, MainButtonHandler, StoryShareParams};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Host bridge backed by `window.Telegram.WebApp`.
pub struct TelegramWebApp;

impl HostBridge for TelegramWebApp {
    fn ready(&self) {
        if let Err(err) = bridge::telegram_ready() {
            logging::warn!("telegram ready signal failed: {err}");
        }
    }

    fn expand(&self) {
        if let Err(err) = bridge::telegram_expand() {
            logging::warn!("telegram expand request failed: {err}");
        }
    }

    fn supports_story_share(&self) -> bool {
        bridge::telegram_supports_story_share()
    }

    fn share_to_story(&self, media_url: &str, params: &StoryShareParams) -> Result<(), String> {
        bridge::telegram_share_to_story(media_url, params)
    }

    fn show_main_button(&self, text: &str) -> Result<(), String> {
        bridge::telegram_show_main_button(text)
    }

    fn on_main_button_click(&self, handler: MainButtonHandler) -> Result<(), String> {
        bridge::telegram_on_main_button_click(handler)
    }

    fn platform(&self) -> Option<String> {
        bridge::telegram_platform()
    }
}

thread_local! {
    static TELEGRAM_HANDLE: OnceCell<Option<HostHandle>> = const { OnceCell::new() };
}

#[derive(Debug, Clone, Copy, Default)]
/// Probe that looks for `window.Telegram.WebApp` in the page's global scope.
///
/// The lookup runs once per thread; every probe hands out the same handle afterwards.
pub struct TelegramHostProbe;

impl HostProbe for TelegramHostProbe {
    fn locate(&self) -> Option<HostHandle> {
        TELEGRAM_HANDLE.with(|handle| {
            handle
                .get_or_init(|| {
                    bridge::telegram_present().then(|| HostHandle::new(Rc::new(TelegramWebApp)))
                })
                .clone()
        })
    }
}
