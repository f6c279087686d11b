//! In-memory host fakes for native targets and tests.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    bridge::{HostBridge, MainButtonHandler, StoryShareParams},
    environment::{HostHandle, HostProbe},
    navigation::Navigator,
};

/// One call received by a [`RecordingHostBridge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// Readiness signal.
    Ready,
    /// Viewport expansion request.
    Expand,
    /// Native story share.
    ShareToStory {
        /// Raw media URL passed to the host.
        media_url: String,
        /// Caption passed in the share options.
        text: String,
    },
    /// Main button shown with a label.
    ShowMainButton(String),
}

#[derive(Default)]
struct RecordingState {
    calls: Vec<HostCall>,
    story_share: bool,
    share_error: Option<String>,
    main_button_error: Option<String>,
    main_button_handler: Option<MainButtonHandler>,
    platform: Option<String>,
}

#[derive(Clone, Default)]
/// Host bridge that records every call in order.
pub struct RecordingHostBridge {
    inner: Rc<RefCell<RecordingState>>,
}

impl fmt::Debug for RecordingHostBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("RecordingHostBridge")
            .field("calls", &state.calls)
            .field("story_share", &state.story_share)
            .finish_non_exhaustive()
    }
}

impl RecordingHostBridge {
    /// Advertises (or hides) the native story-share capability.
    pub fn with_story_share(self, supported: bool) -> Self {
        self.inner.borrow_mut().story_share = supported;
        self
    }

    /// Makes native story-share calls fail with `message`.
    pub fn with_share_error(self, message: impl Into<String>) -> Self {
        self.inner.borrow_mut().share_error = Some(message.into());
        self
    }

    /// Makes main-button setup fail with `message`.
    pub fn with_main_button_error(self, message: impl Into<String>) -> Self {
        self.inner.borrow_mut().main_button_error = Some(message.into());
        self
    }

    /// Reports `platform` as the host platform token.
    pub fn with_platform(self, platform: impl Into<String>) -> Self {
        self.inner.borrow_mut().platform = Some(platform.into());
        self
    }

    /// Returns the recorded calls.
    pub fn calls(&self) -> Vec<HostCall> {
        self.inner.borrow().calls.clone()
    }

    /// Simulates a main-button press. Returns `false` when no handler is registered.
    pub fn press_main_button(&self) -> bool {
        let handler = self.inner.borrow().main_button_handler.clone();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    fn record(&self, call: HostCall) {
        self.inner.borrow_mut().calls.push(call);
    }
}

impl HostBridge for RecordingHostBridge {
    fn ready(&self) {
        self.record(HostCall::Ready);
    }

    fn expand(&self) {
        self.record(HostCall::Expand);
    }

    fn supports_story_share(&self) -> bool {
        self.inner.borrow().story_share
    }

    fn share_to_story(&self, media_url: &str, params: &StoryShareParams) -> Result<(), String> {
        if let Some(err) = self.inner.borrow().share_error.clone() {
            return Err(err);
        }
        self.record(HostCall::ShareToStory {
            media_url: media_url.to_string(),
            text: params.text.clone(),
        });
        Ok(())
    }

    fn show_main_button(&self, text: &str) -> Result<(), String> {
        if let Some(err) = self.inner.borrow().main_button_error.clone() {
            return Err(err);
        }
        self.record(HostCall::ShowMainButton(text.to_string()));
        Ok(())
    }

    fn on_main_button_click(&self, handler: MainButtonHandler) -> Result<(), String> {
        self.inner.borrow_mut().main_button_handler = Some(handler);
        Ok(())
    }

    fn platform(&self) -> Option<String> {
        self.inner.borrow().platform.clone()
    }
}

#[derive(Debug, Clone, Default)]
/// Probe with a fixed answer, standing in for the global execution context.
///
/// Every lookup returns a clone of the same handle, and clones of the probe share it too.
pub struct StaticHostProbe {
    handle: Option<HostHandle>,
}

impl StaticHostProbe {
    /// Probe that always finds `bridge`.
    pub fn present(bridge: impl HostBridge + 'static) -> Self {
        Self {
            handle: Some(HostHandle::new(Rc::new(bridge))),
        }
    }

    /// Probe that never finds a bridging object.
    pub fn absent() -> Self {
        Self::default()
    }
}

impl HostProbe for StaticHostProbe {
    fn locate(&self) -> Option<HostHandle> {
        self.handle.clone()
    }
}

#[derive(Debug, Clone, Default)]
/// Navigator that records navigation targets instead of leaving the page.
pub struct MemoryNavigator {
    visited: Rc<RefCell<Vec<String>>>,
    error: Option<String>,
}

impl MemoryNavigator {
    /// Navigator whose every navigation fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            visited: Rc::default(),
            error: Some(message.into()),
        }
    }

    /// Returns the recorded navigation targets.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, url: &str) -> Result<(), String> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn recording_bridge_clones_share_call_log() {
        let bridge = RecordingHostBridge::default();
        let clone = bridge.clone();
        clone.ready();
        clone.expand();
        assert_eq!(bridge.calls(), vec![HostCall::Ready, HostCall::Expand]);
    }

    #[test]
    fn main_button_press_invokes_registered_handler() {
        let bridge = RecordingHostBridge::default();
        assert!(!bridge.press_main_button());

        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        bridge
            .on_main_button_click(Rc::new(move || counter.set(counter.get() + 1)))
            .expect("register handler");

        assert!(bridge.press_main_button());
        assert!(bridge.press_main_button());
        assert_eq!(presses.get(), 2);
    }

    #[test]
    fn failing_navigator_records_nothing() {
        let navigator = MemoryNavigator::failing("blocked");
        assert_eq!(navigator.navigate("tg://story"), Err("blocked".to_string()));
        assert_eq!(navigator.visited(), Vec::<String>::new());
    }

    #[test]
    fn static_probe_answers_are_fixed() {
        assert!(StaticHostProbe::absent().locate().is_none());
        let probe = StaticHostProbe::present(RecordingHostBridge::default().with_platform("ios"));
        assert_eq!(
            probe.locate().and_then(|handle| handle.bridge().platform()),
            Some("ios".to_string())
        );
    }
}
