//! Process-lifetime owner of the [`HostEnvironment`].

use std::cell::RefCell;

use leptos::logging;

use crate::environment::{detect, HandshakeOptions, HostEnvironment, HostProbe, InitResult};

#[derive(Debug, Default)]
/// Owns the host classification for the page lifetime.
///
/// The environment starts [`HostEnvironment::Uninitialized`] and leaves that state exactly once,
/// on the first [`HostSession::resolve`]. Consumers receive clones; the session never re-probes.
pub struct HostSession {
    environment: RefCell<HostEnvironment>,
}

impl HostSession {
    /// Creates an unresolved session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the environment through `probe` on first call and returns the classification.
    ///
    /// Later calls return the stored classification without touching `probe`.
    pub fn resolve(&self, probe: &dyn HostProbe) -> HostEnvironment {
        if let Some(resolved) = self.resolved() {
            return resolved;
        }

        let environment = detect(probe);
        match &environment {
            HostEnvironment::Detected(handle) => logging::log!(
                "host bridge detected (share mechanism: {})",
                handle.mechanism().as_str()
            ),
            _ => logging::warn!("host bridge not found; story sharing disabled"),
        }
        *self.environment.borrow_mut() = environment.clone();
        environment
    }

    /// Returns a copy of the current environment.
    pub fn environment(&self) -> HostEnvironment {
        self.environment.borrow().clone()
    }

    /// Returns whether a host bridging object was detected.
    pub fn is_host_available(&self) -> bool {
        self.environment.borrow().is_available()
    }

    /// Runs the readiness handshake against the detected host.
    ///
    /// Returns [`InitResult::HostUnavailable`] while unresolved or absent.
    pub fn initialize(&self, options: &HandshakeOptions) -> InitResult {
        let environment = self.environment();
        match environment.handle() {
            Some(handle) => handle.initialize(options),
            None => InitResult::HostUnavailable,
        }
    }

    fn resolved(&self) -> Option<HostEnvironment> {
        let environment = self.environment.borrow();
        environment.is_resolved().then(|| environment.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        environment::HostHandle,
        memory::{HostCall, RecordingHostBridge, StaticHostProbe},
    };

    struct CountingProbe {
        inner: StaticHostProbe,
        lookups: Cell<usize>,
    }

    impl HostProbe for CountingProbe {
        fn locate(&self) -> Option<HostHandle> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.locate()
        }
    }

    #[test]
    fn new_session_is_uninitialized_and_unavailable() {
        let session = HostSession::new();
        assert_eq!(session.environment().as_str(), "uninitialized");
        assert!(!session.is_host_available());
        assert_eq!(
            session.initialize(&HandshakeOptions::default()),
            InitResult::HostUnavailable
        );
    }

    #[test]
    fn resolve_transitions_once_and_never_reprobes() {
        let probe = CountingProbe {
            inner: StaticHostProbe::present(RecordingHostBridge::default()),
            lookups: Cell::new(0),
        };
        let session = HostSession::new();

        assert_eq!(session.resolve(&probe).as_str(), "detected");
        assert_eq!(session.resolve(&StaticHostProbe::absent()).as_str(), "detected");
        assert_eq!(session.resolve(&probe).as_str(), "detected");
        assert_eq!(probe.lookups.get(), 1);
    }

    #[test]
    fn absent_is_terminal() {
        let session = HostSession::new();
        assert_eq!(session.resolve(&StaticHostProbe::absent()).as_str(), "absent");
        assert_eq!(
            session
                .resolve(&StaticHostProbe::present(RecordingHostBridge::default()))
                .as_str(),
            "absent"
        );
        assert_eq!(
            session.initialize(&HandshakeOptions::default()),
            InitResult::HostUnavailable
        );
    }

    #[test]
    fn uninitialized_to_detected_then_double_initialize_sends_one_handshake() {
        let bridge = RecordingHostBridge::default();
        let session = HostSession::new();
        assert_eq!(session.environment().as_str(), "uninitialized");

        session.resolve(&StaticHostProbe::present(bridge.clone()));
        assert!(session.is_host_available());

        let options = HandshakeOptions::default();
        assert_eq!(session.initialize(&options), InitResult::Initialized);
        assert_eq!(session.initialize(&options), InitResult::AlreadyInitialized);

        let calls = bridge.calls();
        assert_eq!(calls.iter().filter(|c| **c == HostCall::Ready).count(), 1);
        assert_eq!(calls.iter().filter(|c| **c == HostCall::Expand).count(), 1);
    }

    #[test]
    fn environment_clones_share_handshake_guard_with_session() {
        let bridge = RecordingHostBridge::default();
        let session = HostSession::new();
        let environment = session.resolve(&StaticHostProbe::present(bridge.clone()));

        let handle = environment.handle().expect("detected handle");
        assert_eq!(
            handle.initialize(&HandshakeOptions::default()),
            InitResult::Initialized
        );
        assert_eq!(
            session.initialize(&HandshakeOptions::default()),
            InitResult::AlreadyInitialized
        );
        assert_eq!(bridge.calls(), vec![HostCall::Ready, HostCall::Expand]);
    }

    #[test]
    fn sessions_resolved_against_one_host_share_its_handshake() {
        let bridge = RecordingHostBridge::default();
        let probe = StaticHostProbe::present(bridge.clone());
        let options = HandshakeOptions::default();

        let first = HostSession::new();
        first.resolve(&probe);
        assert_eq!(first.initialize(&options), InitResult::Initialized);

        let remounted = HostSession::new();
        remounted.resolve(&probe);
        assert!(remounted.is_host_available());
        assert_eq!(remounted.initialize(&options), InitResult::AlreadyInitialized);
        assert_eq!(bridge.calls(), vec![HostCall::Ready, HostCall::Expand]);
    }
}
