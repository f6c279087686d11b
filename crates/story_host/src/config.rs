//! Story-share configuration.

use serde::{Deserialize, Serialize};

/// Default custom URI scheme intercepted by the host app.
pub const DEFAULT_STORY_SCHEME: &str = "tg";
/// Default main-button label shown after the handshake.
pub const DEFAULT_MAIN_BUTTON_TEXT: &str = "Share Story";
const DEFAULT_IMAGE_URL: &str = "https://source.unsplash.com/random/800x600";
const DEFAULT_CAPTION: &str = "🔥 Join the PepeRefBot! Earn rewards by sharing this story!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Configuration for the share controller and the host handshake.
pub struct StoryShareConfig {
    /// Custom URI scheme used by the URI-scheme fallback (`<scheme>://story?...`).
    pub scheme: String,
    /// Image shared to the story and shown in the preview.
    pub image_url: String,
    /// Caption pre-filled in the editor.
    pub default_caption: String,
    /// Main-button label set during the handshake.
    pub main_button_text: String,
    /// Whether the handshake shows the host main button.
    pub show_main_button: bool,
}

impl Default for StoryShareConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_STORY_SCHEME.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            default_caption: DEFAULT_CAPTION.to_string(),
            main_button_text: DEFAULT_MAIN_BUTTON_TEXT.to_string(),
            show_main_button: true,
        }
    }
}

impl StoryShareConfig {
    /// Parses a JSON configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or `scheme` is not a valid URI scheme.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields the share controller depends on structurally.
    ///
    /// # Errors
    ///
    /// Returns an error when `scheme` is not `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    pub fn validate(&self) -> Result<(), String> {
        if is_valid_scheme(&self.scheme) {
            Ok(())
        } else {
            Err(format!("invalid story URI scheme `{}`", self.scheme))
        }
    }
}

pub(crate) fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}
