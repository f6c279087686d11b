//! Browsing-context navigation adapter.

use story_host::Navigator;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Navigator that assigns `window.location.href`.
pub struct WebNavigator;

impl Navigator for WebNavigator {
    fn navigate(&self, url: &str) -> Result<(), String> {
        bridge::navigate(url)
    }
}
