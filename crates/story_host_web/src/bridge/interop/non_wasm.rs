use story_host::{MainButtonHandler, StoryShareParams};

fn unsupported() -> String {
    "Telegram WebApp bridge is only available when compiled for wasm32".to_string()
}

pub fn telegram_present() -> bool {
    false
}

pub fn telegram_ready() -> Result<(), String> {
    Err(unsupported())
}

pub fn telegram_expand() -> Result<(), String> {
    Err(unsupported())
}

pub fn telegram_supports_story_share() -> bool {
    false
}

pub fn telegram_share_to_story(_media_url: &str, _params: &StoryShareParams) -> Result<(), String> {
    Err(unsupported())
}

pub fn telegram_show_main_button(_text: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn telegram_on_main_button_click(_handler: MainButtonHandler) -> Result<(), String> {
    Err(unsupported())
}

pub fn telegram_platform() -> Option<String> {
    None
}

pub fn navigate(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn embedded_text(_element_id: &str) -> Option<String> {
    None
}
