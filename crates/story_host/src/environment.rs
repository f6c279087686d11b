//! Host detection, the detected-host handle, and the one-time readiness handshake.

use std::{cell::Cell, fmt, rc::Rc};

use leptos::logging;

use crate::{bridge::HostBridge, config::StoryShareConfig};

/// Looks up the host bridging object in the global execution context.
///
/// Implementations must be side-effect free: the lookup may run any number of times and must
/// return the same answer for the lifetime of the page. A present host is returned as a clone of
/// one memoized [`HostHandle`] per bridging object, so the handshake guard follows the bridging
/// object rather than any single detection.
pub trait HostProbe {
    /// Returns the handle to the bridging object when the page runs inside the host webview.
    fn locate(&self) -> Option<HostHandle>;
}

/// Story-share mechanism, resolved once when the host is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMechanism {
    /// Direct bridge call into the host's story composer.
    NativeStory,
    /// Navigation to a custom-scheme URI intercepted by the host app.
    UriScheme,
}

impl ShareMechanism {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NativeStory => "native-story",
            Self::UriScheme => "uri-scheme",
        }
    }
}

/// Handle to a detected bridging object.
///
/// Clones share the bridging object and the handshake guard, so the handshake runs once no
/// matter which clone initializes it.
#[derive(Clone)]
pub struct HostHandle {
    bridge: Rc<dyn HostBridge>,
    mechanism: ShareMechanism,
    handshake_done: Rc<Cell<bool>>,
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHandle")
            .field("mechanism", &self.mechanism)
            .field("handshake_done", &self.handshake_done.get())
            .finish_non_exhaustive()
    }
}

impl HostHandle {
    /// Wraps `bridge`, resolving the share mechanism from its advertised capabilities.
    pub fn new(bridge: Rc<dyn HostBridge>) -> Self {
        let mechanism = if bridge.supports_story_share() {
            ShareMechanism::NativeStory
        } else {
            ShareMechanism::UriScheme
        };
        Self {
            bridge,
            mechanism,
            handshake_done: Rc::new(Cell::new(false)),
        }
    }

    /// Returns the underlying bridging object.
    pub fn bridge(&self) -> &dyn HostBridge {
        self.bridge.as_ref()
    }

    /// Returns the share mechanism resolved at detection time.
    pub fn mechanism(&self) -> ShareMechanism {
        self.mechanism
    }

    /// Returns whether the readiness handshake already ran.
    pub fn is_initialized(&self) -> bool {
        self.handshake_done.get()
    }

    /// Runs the readiness handshake: readiness signal, then viewport expansion, then the optional
    /// main-button setup.
    ///
    /// Only the first call has side effects; later calls return [`InitResult::AlreadyInitialized`].
    pub fn initialize(&self, options: &HandshakeOptions) -> InitResult {
        if self.handshake_done.replace(true) {
            return InitResult::AlreadyInitialized;
        }

        self.bridge.ready();
        self.bridge.expand();

        if let Some(text) = options.main_button_text.as_deref() {
            if let Err(err) = self.bridge.show_main_button(text) {
                logging::warn!("host main button setup failed: {err}");
            }
        }

        logging::log!(
            "host handshake complete (platform: {}, share: {})",
            self.bridge.platform().as_deref().unwrap_or("unknown"),
            self.mechanism.as_str()
        );
        InitResult::Initialized
    }
}

/// Process-wide classification of the execution context.
#[derive(Debug, Clone, Default)]
pub enum HostEnvironment {
    /// Detection has not run yet.
    #[default]
    Uninitialized,
    /// The bridging object is present.
    Detected(HostHandle),
    /// The page runs in a plain browser; sharing is disabled for the session.
    Absent,
}

impl HostEnvironment {
    /// Returns the detected handle, if any.
    pub fn handle(&self) -> Option<&HostHandle> {
        match self {
            Self::Detected(handle) => Some(handle),
            Self::Uninitialized | Self::Absent => None,
        }
    }

    /// Returns whether the host bridging object is available for sharing.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Detected(_))
    }

    /// Returns whether detection has run.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// Returns a stable string token for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Detected(_) => "detected",
            Self::Absent => "absent",
        }
    }
}

/// Result of a handshake attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitResult {
    /// The handshake ran now.
    Initialized,
    /// The handshake already ran; nothing was sent to the host.
    AlreadyInitialized,
    /// No host is available to initialize.
    HostUnavailable,
}

/// Optional steps performed after the readiness and expand calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandshakeOptions {
    /// Main-button label; `None` leaves the main button hidden.
    pub main_button_text: Option<String>,
}

impl HandshakeOptions {
    /// Derives handshake options from the story-share configuration.
    pub fn from_config(config: &StoryShareConfig) -> Self {
        Self {
            main_button_text: config
                .show_main_button
                .then(|| config.main_button_text.clone()),
        }
    }
}

/// Classifies the execution context through `probe`.
///
/// Absence is an expected outcome, not an error. The share mechanism is resolved here and never
/// re-probed afterwards.
pub fn detect(probe: &dyn HostProbe) -> HostEnvironment {
    probe
        .locate()
        .map_or(HostEnvironment::Absent, HostEnvironment::Detected)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::{HostCall, RecordingHostBridge, StaticHostProbe};

    #[test]
    fn detect_is_stable_for_present_host() {
        let probe = StaticHostProbe::present(RecordingHostBridge::default());
        for _ in 0..3 {
            assert_eq!(detect(&probe).as_str(), "detected");
        }
    }

    #[test]
    fn detect_is_stable_for_absent_host() {
        let probe = StaticHostProbe::absent();
        for _ in 0..3 {
            assert_eq!(detect(&probe).as_str(), "absent");
        }
    }

    #[test]
    fn detect_has_no_host_side_effects() {
        let bridge = RecordingHostBridge::default();
        let probe = StaticHostProbe::present(bridge.clone());
        let _ = detect(&probe);
        let _ = detect(&probe);
        assert_eq!(bridge.calls(), Vec::<HostCall>::new());
    }

    #[test]
    fn mechanism_follows_native_capability() {
        let native = detect(&StaticHostProbe::present(
            RecordingHostBridge::default().with_story_share(true),
        ));
        let fallback = detect(&StaticHostProbe::present(RecordingHostBridge::default()));

        assert_eq!(
            native.handle().map(HostHandle::mechanism),
            Some(ShareMechanism::NativeStory)
        );
        assert_eq!(
            fallback.handle().map(HostHandle::mechanism),
            Some(ShareMechanism::UriScheme)
        );
    }

    #[test]
    fn initialize_runs_handshake_once_in_order() {
        let bridge = RecordingHostBridge::default();
        let handle = HostHandle::new(Rc::new(bridge.clone()));
        let options = HandshakeOptions::default();

        assert_eq!(handle.initialize(&options), InitResult::Initialized);
        assert_eq!(handle.initialize(&options), InitResult::AlreadyInitialized);
        assert!(handle.is_initialized());
        assert_eq!(bridge.calls(), vec![HostCall::Ready, HostCall::Expand]);
    }

    #[test]
    fn handshake_guard_is_shared_between_clones() {
        let bridge = RecordingHostBridge::default();
        let handle = HostHandle::new(Rc::new(bridge.clone()));
        let clone = handle.clone();

        assert_eq!(
            handle.initialize(&HandshakeOptions::default()),
            InitResult::Initialized
        );
        assert_eq!(
            clone.initialize(&HandshakeOptions::default()),
            InitResult::AlreadyInitialized
        );
        assert_eq!(bridge.calls().len(), 2);
    }

    #[test]
    fn repeated_detection_shares_one_handshake() {
        let bridge = RecordingHostBridge::default();
        let probe = StaticHostProbe::present(bridge.clone());
        let options = HandshakeOptions::default();

        let first = detect(&probe);
        let second = detect(&probe);

        assert_eq!(
            first.handle().map(|handle| handle.initialize(&options)),
            Some(InitResult::Initialized)
        );
        assert_eq!(
            second.handle().map(|handle| handle.initialize(&options)),
            Some(InitResult::AlreadyInitialized)
        );
        assert_eq!(second.handle().map(HostHandle::is_initialized), Some(true));
        assert_eq!(bridge.calls(), vec![HostCall::Ready, HostCall::Expand]);
    }

    #[test]
    fn handshake_shows_main_button_after_expand() {
        let bridge = RecordingHostBridge::default();
        let handle = HostHandle::new(Rc::new(bridge.clone()));
        let options = HandshakeOptions::from_config(&StoryShareConfig::default());

        handle.initialize(&options);

        assert_eq!(
            bridge.calls(),
            vec![
                HostCall::Ready,
                HostCall::Expand,
                HostCall::ShowMainButton("Share Story".to_string()),
            ]
        );
    }

    #[test]
    fn main_button_failure_does_not_fail_handshake() {
        let bridge = RecordingHostBridge::default().with_main_button_error("no main button");
        let handle = HostHandle::new(Rc::new(bridge.clone()));
        let options = HandshakeOptions {
            main_button_text: Some("Share".to_string()),
        };

        assert_eq!(handle.initialize(&options), InitResult::Initialized);
        assert_eq!(bridge.calls(), vec![HostCall::Ready, HostCall::Expand]);
    }

    #[test]
    fn hidden_main_button_config_skips_main_button() {
        let config = StoryShareConfig {
            show_main_button: false,
            ..StoryShareConfig::default()
        };
        assert_eq!(
            HandshakeOptions::from_config(&config),
            HandshakeOptions::default()
        );
    }
}
