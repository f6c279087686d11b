//! Story-share dispatch: mechanism selection, payload encoding, and outcome reporting.

use std::rc::Rc;

use leptos::logging;
use thiserror::Error;

use crate::{
    bridge::StoryShareParams,
    config::{is_valid_scheme, StoryShareConfig},
    encoding::encode_component,
    environment::{HostEnvironment, ShareMechanism},
    navigation::Navigator,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One user-initiated share action.
pub struct ShareRequest {
    /// Image shared to the story. Reachability is the host's concern.
    pub image_reference: String,
    /// User-editable caption; may be empty.
    pub caption_text: String,
}

impl ShareRequest {
    /// Builds a request from an image reference and caption.
    pub fn new(image_reference: impl Into<String>, caption_text: impl Into<String>) -> Self {
        Self {
            image_reference: image_reference.into(),
            caption_text: caption_text.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a share action is rejected.
pub enum ShareError {
    /// No host bridging object; sharing stays disabled for the session.
    #[error("story sharing is only available inside the host app")]
    HostUnavailable,
    /// The selected mechanism could not be invoked.
    #[error("story share dispatch rejected: {0}")]
    DispatchRejected(String),
}

impl ShareError {
    /// Returns whether the failure applies to this attempt only (as opposed to the session).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DispatchRejected(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a share action.
///
/// `Invoked` means dispatched: the host reports nothing about whether the story was posted.
pub enum ShareOutcome {
    /// The share was handed to the host through the given mechanism.
    Invoked(ShareMechanism),
    /// The share was not dispatched.
    Rejected(ShareError),
}

impl ShareOutcome {
    /// Returns whether the share was dispatched.
    pub fn is_invoked(&self) -> bool {
        matches!(self, Self::Invoked(_))
    }

    /// User-facing status line for the renderer.
    pub fn status_message(&self) -> String {
        match self {
            Self::Invoked(_) => "Story composer opened.".to_string(),
            Self::Rejected(err) => err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Independently percent-encoded share components.
pub struct SharePayload {
    /// Encoded image reference.
    pub encoded_image: String,
    /// Encoded caption.
    pub encoded_caption: String,
}

impl SharePayload {
    /// Encodes the image reference and caption of `request`.
    pub fn encode(request: &ShareRequest) -> Self {
        Self {
            encoded_image: encode_component(&request.image_reference),
            encoded_caption: encode_component(&request.caption_text),
        }
    }

    /// Renders `<scheme>://story?photo=<image>&text=<caption>`.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::DispatchRejected`] when `scheme` is not a valid URI scheme.
    pub fn story_uri(&self, scheme: &str) -> Result<String, ShareError> {
        if !is_valid_scheme(scheme) {
            return Err(ShareError::DispatchRejected(format!(
                "invalid story URI scheme `{scheme}`"
            )));
        }
        Ok(format!(
            "{scheme}://story?photo={}&text={}",
            self.encoded_image, self.encoded_caption
        ))
    }
}

/// Builds the custom-scheme story URI for `request`.
///
/// # Errors
///
/// Returns [`ShareError::DispatchRejected`] when `scheme` is not a valid URI scheme.
pub fn build_story_uri(scheme: &str, request: &ShareRequest) -> Result<String, ShareError> {
    SharePayload::encode(request).story_uri(scheme)
}

#[derive(Clone)]
/// Selects and executes one share mechanism per user action.
pub struct ShareController {
    environment: HostEnvironment,
    navigator: Rc<dyn Navigator>,
    config: StoryShareConfig,
}

impl ShareController {
    /// Creates a controller bound to a resolved environment.
    pub fn new(
        environment: HostEnvironment,
        navigator: Rc<dyn Navigator>,
        config: StoryShareConfig,
    ) -> Self {
        Self {
            environment,
            navigator,
            config,
        }
    }

    /// Returns whether sharing is possible in this environment.
    pub fn host_available(&self) -> bool {
        self.environment.is_available()
    }

    /// Returns the environment this controller was built with.
    pub fn environment(&self) -> &HostEnvironment {
        &self.environment
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &StoryShareConfig {
        &self.config
    }

    /// Shares the configured image with `caption`.
    pub fn on_share_requested(&self, caption: &str) -> ShareOutcome {
        self.share(&ShareRequest::new(self.config.image_url.clone(), caption))
    }

    /// Dispatches `request` through the mechanism resolved at detection time.
    ///
    /// Nothing is sent to the host or the browsing context unless the host was detected.
    pub fn share(&self, request: &ShareRequest) -> ShareOutcome {
        match self.dispatch(request) {
            Ok(mechanism) => {
                logging::log!("story share dispatched via {}", mechanism.as_str());
                ShareOutcome::Invoked(mechanism)
            }
            Err(err) => {
                logging::warn!("story share rejected: {err}");
                ShareOutcome::Rejected(err)
            }
        }
    }

    fn dispatch(&self, request: &ShareRequest) -> Result<ShareMechanism, ShareError> {
        let Some(handle) = self.environment.handle() else {
            return Err(ShareError::HostUnavailable);
        };

        let payload = SharePayload::encode(request);
        match handle.mechanism() {
            ShareMechanism::NativeStory => {
                let params = StoryShareParams {
                    text: request.caption_text.clone(),
                };
                handle
                    .bridge()
                    .share_to_story(&request.image_reference, &params)
                    .map_err(ShareError::DispatchRejected)?;
            }
            ShareMechanism::UriScheme => {
                let uri = payload.story_uri(&self.config.scheme)?;
                self.navigator
                    .navigate(&uri)
                    .map_err(ShareError::DispatchRejected)?;
            }
        }
        Ok(handle.mechanism())
    }
}
