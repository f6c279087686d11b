//! Host bridging-object contract.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Callback invoked when the host's main button is pressed.
pub type MainButtonHandler = Rc<dyn Fn()>;

/// Options passed to the host's native "share to story" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryShareParams {
    /// Caption shown in the host's story composer.
    pub text: String,
}

/// Capabilities exposed by the platform-injected bridging object.
///
/// Calls are synchronous. The readiness and expand calls are fire-and-forget: the host returns
/// nothing this layer validates, so adapters log transport failures instead of surfacing them.
pub trait HostBridge {
    /// Tells the host the application has finished its initial load.
    fn ready(&self);

    /// Requests the full-height viewport layout.
    fn expand(&self);

    /// Returns whether the host exposes a direct "share to story" call.
    fn supports_story_share(&self) -> bool;

    /// Opens the host's story composer with `media_url` and `params`.
    ///
    /// `media_url` is passed raw; the host validates and renders it.
    fn share_to_story(&self, media_url: &str, params: &StoryShareParams) -> Result<(), String>;

    /// Sets the main button label and makes it visible.
    fn show_main_button(&self, text: &str) -> Result<(), String>;

    /// Registers `handler` for main-button presses.
    fn on_main_button_click(&self, handler: MainButtonHandler) -> Result<(), String>;

    /// Host platform token (`"ios"`, `"android"`, `"tdesktop"`, ...) when reported.
    fn platform(&self) -> Option<String> {
        None
    }
}
