//! Page-embedded story-share configuration.
//!
//! The page carries its configuration as JSON inside
//! `<script type="application/json" id="story-share-config">`. A missing element means defaults;
//! an unparseable one is logged and also falls back to defaults.

use leptos::logging;
use story_host::StoryShareConfig;

use crate::bridge;

/// DOM id of the embedded configuration element.
pub const STORY_SHARE_CONFIG_ELEMENT_ID: &str = "story-share-config";

/// Loads the page-embedded configuration, falling back to defaults.
pub fn load_story_share_config() -> StoryShareConfig {
    parse_embedded_config(bridge::embedded_text(STORY_SHARE_CONFIG_ELEMENT_ID).as_deref())
}

fn parse_embedded_config(raw: Option<&str>) -> StoryShareConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return StoryShareConfig::default();
    };
    match StoryShareConfig::from_json_str(raw) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("story share config rejected, using defaults: {err}");
            StoryShareConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_or_blank_config_uses_defaults() {
        assert_eq!(parse_embedded_config(None), StoryShareConfig::default());
        assert_eq!(
            parse_embedded_config(Some("  \n ")),
            StoryShareConfig::default()
        );
    }

    #[test]
    fn embedded_config_overrides_fields() {
        let config = parse_embedded_config(Some(
            r#"{ "image_url": "https://cdn.example.com/banner.jpg", "show_main_button": false }"#,
        ));
        assert_eq!(config.image_url, "https://cdn.example.com/banner.jpg");
        assert!(!config.show_main_button);
        assert_eq!(config.scheme, "tg");
    }

    #[test]
    fn invalid_embedded_config_falls_back_to_defaults() {
        assert_eq!(
            parse_embedded_config(Some(r#"{"scheme": "://"}"#)),
            StoryShareConfig::default()
        );
        assert_eq!(
            parse_embedded_config(Some("not json")),
            StoryShareConfig::default()
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_loader_returns_defaults() {
        assert_eq!(load_story_share_config(), StoryShareConfig::default());
    }
}
