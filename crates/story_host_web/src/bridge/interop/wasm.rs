use story_host::{MainButtonHandler, StoryShareParams};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};

#[wasm_bindgen(inline_js = r#"
const STORY_SHARE_MIN_VERSION = '7.8';

function webApp() {
  if (typeof window === 'undefined') return null;
  const telegram = window.Telegram;
  return telegram && telegram.WebApp ? telegram.WebApp : null;
}

function requireWebApp() {
  const app = webApp();
  if (!app) {
    throw new Error('Telegram WebApp is unavailable in this browser context');
  }
  return app;
}

function requireMainButton() {
  const button = requireWebApp().MainButton;
  if (!button) {
    throw new Error('Telegram MainButton is unavailable');
  }
  return button;
}

export function jsTelegramPresent() { return webApp() !== null; }
export function jsTelegramReady() { requireWebApp().ready(); }
export function jsTelegramExpand() { requireWebApp().expand(); }

export function jsTelegramSupportsStoryShare() {
  const app = webApp();
  if (!app || typeof app.shareToStory !== 'function') return false;
  if (typeof app.isVersionAtLeast === 'function') {
    return app.isVersionAtLeast(STORY_SHARE_MIN_VERSION);
  }
  return true;
}

export function jsTelegramShareToStory(mediaUrl, params) {
  requireWebApp().shareToStory(mediaUrl, params);
}

export function jsTelegramShowMainButton(text) {
  const button = requireMainButton();
  if (typeof button.setText === 'function') {
    button.setText(text);
  } else {
    button.text = text;
  }
  button.show();
}

export function jsTelegramOnMainButtonClick(callback) {
  requireMainButton().onClick(callback);
}

export function jsTelegramPlatform() {
  const app = webApp();
  return app && typeof app.platform === 'string' ? app.platform : null;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsTelegramPresent)]
    fn js_telegram_present() -> bool;
    #[wasm_bindgen(catch, js_name = jsTelegramReady)]
    fn js_telegram_ready() -> Result<(), JsValue>;
    #[wasm_bindgen(catch, js_name = jsTelegramExpand)]
    fn js_telegram_expand() -> Result<(), JsValue>;
    #[wasm_bindgen(js_name = jsTelegramSupportsStoryShare)]
    fn js_telegram_supports_story_share() -> bool;
    #[wasm_bindgen(catch, js_name = jsTelegramShareToStory)]
    fn js_telegram_share_to_story(media_url: &str, params: JsValue) -> Result<(), JsValue>;
    #[wasm_bindgen(catch, js_name = jsTelegramShowMainButton)]
    fn js_telegram_show_main_button(text: &str) -> Result<(), JsValue>;
    #[wasm_bindgen(catch, js_name = jsTelegramOnMainButtonClick)]
    fn js_telegram_on_main_button_click(callback: &js_sys::Function) -> Result<(), JsValue>;
    #[wasm_bindgen(js_name = jsTelegramPlatform)]
    fn js_telegram_platform() -> Option<String>;
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub fn telegram_present() -> bool {
    js_telegram_present()
}

pub fn telegram_ready() -> Result<(), String> {
    js_telegram_ready().map_err(js_error_to_string)
}

pub fn telegram_expand() -> Result<(), String> {
    js_telegram_expand().map_err(js_error_to_string)
}

pub fn telegram_supports_story_share() -> bool {
    js_telegram_supports_story_share()
}

pub fn telegram_share_to_story(media_url: &str, params: &StoryShareParams) -> Result<(), String> {
    let params = serde_wasm_bindgen::to_value(params).map_err(|e| e.to_string())?;
    js_telegram_share_to_story(media_url, params).map_err(js_error_to_string)
}

pub fn telegram_show_main_button(text: &str) -> Result<(), String> {
    js_telegram_show_main_button(text).map_err(js_error_to_string)
}

pub fn telegram_on_main_button_click(handler: MainButtonHandler) -> Result<(), String> {
    let callback = Closure::<dyn Fn()>::new(move || handler());
    js_telegram_on_main_button_click(callback.as_ref().unchecked_ref())
        .map_err(js_error_to_string)?;
    // The host keeps the listener for the page lifetime.
    callback.forget();
    Ok(())
}

pub fn telegram_platform() -> Option<String> {
    js_telegram_platform()
}

pub fn navigate(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .location()
        .set_href(url)
        .map_err(js_error_to_string)
}

pub fn embedded_text(element_id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?
        .text_content()
}
