//! Browsing-context navigation contract used by the URI-scheme share fallback.

/// Host service that points the browsing context at a URL.
///
/// Navigation is fire-and-forget: custom schemes are intercepted by the host OS and no
/// confirmation comes back.
pub trait Navigator {
    /// Navigates the current browsing context to `url`.
    fn navigate(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigator for unsupported targets.
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}
