use std::rc::Rc;

use story_host::{
    HostHandle, HostProbe, HostSession, Navigator, NoopNavigator, ShareController,
    StaticHostProbe, StoryShareConfig,
};

use crate::{TelegramHostProbe, WebNavigator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `story_host_web` adapters.
pub enum HostStrategy {
    /// Telegram WebApp bridge and window-location navigation.
    Browser,
    /// Placeholder adapters: the host is always absent and navigation is a no-op.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete probe behind [`HostProbe`].
#[derive(Clone)]
pub enum HostProbeAdapter {
    /// Looks up `window.Telegram.WebApp`.
    Browser(TelegramHostProbe),
    /// Never finds a host.
    Stub(StaticHostProbe),
}

impl HostProbe for HostProbeAdapter {
    fn locate(&self) -> Option<HostHandle> {
        match self {
            Self::Browser(probe) => probe.locate(),
            Self::Stub(probe) => probe.locate(),
        }
    }
}

/// Adapter enum that erases the concrete navigator behind [`Navigator`].
#[derive(Debug, Clone, Copy)]
pub enum NavigatorAdapter {
    /// Assigns `window.location.href`.
    Browser(WebNavigator),
    /// Discards navigation requests.
    Stub(NoopNavigator),
}

impl Navigator for NavigatorAdapter {
    fn navigate(&self, url: &str) -> Result<(), String> {
        match self {
            Self::Browser(navigator) => navigator.navigate(url),
            Self::Stub(navigator) => navigator.navigate(url),
        }
    }
}

/// Builds the host probe for the compile-time selected host strategy.
pub fn host_probe() -> HostProbeAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => HostProbeAdapter::Browser(TelegramHostProbe),
        HostStrategy::Stub => HostProbeAdapter::Stub(StaticHostProbe::absent()),
    }
}

/// Builds the navigator for the compile-time selected host strategy.
pub fn navigator() -> NavigatorAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NavigatorAdapter::Browser(WebNavigator),
        HostStrategy::Stub => NavigatorAdapter::Stub(NoopNavigator),
    }
}

/// Resolves `session` against the selected probe and wires a [`ShareController`] to it.
///
/// The session is resolved at most once; a session that is already resolved keeps its
/// classification.
pub fn build_share_controller(session: &HostSession, config: StoryShareConfig) -> ShareController {
    let environment = session.resolve(&host_probe());
    ShareController::new(environment, Rc::new(navigator()), config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use story_host::{RecordingHostBridge, ShareError, ShareOutcome};

    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        let expected = match selected_host_strategy() {
            HostStrategy::Browser => "browser",
            HostStrategy::Stub => "stub",
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_controller_rejects_as_host_unavailable() {
        let session = HostSession::new();
        let controller = build_share_controller(&session, StoryShareConfig::default());

        assert!(!controller.host_available());
        assert!(!session.is_host_available());
        assert_eq!(
            controller.on_share_requested("🔥 Join now!"),
            ShareOutcome::Rejected(ShareError::HostUnavailable)
        );
    }

    #[test]
    fn pre_resolved_session_keeps_its_classification() {
        let session = HostSession::new();
        session.resolve(&StaticHostProbe::present(RecordingHostBridge::default()));

        let controller = build_share_controller(&session, StoryShareConfig::default());
        assert!(controller.host_available());
    }
}
