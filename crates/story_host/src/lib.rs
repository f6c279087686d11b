//! Typed host-bridge contracts and story-share core logic used by browser adapters and the site.
//!
//! This crate is the target-independent boundary for the mini-app host. It resolves whether the
//! chat platform's bridging object is present, performs the one-time readiness handshake, and
//! selects the story-share mechanism (native bridge call or URI-scheme navigation). Concrete
//! browser adapters live in `story_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod config;
pub mod encoding;
pub mod environment;
pub mod memory;
pub mod navigation;
pub mod session;
pub mod share;

pub use bridge::{HostBridge, MainButtonHandler, StoryShareParams};
pub use config::{StoryShareConfig, DEFAULT_MAIN_BUTTON_TEXT, DEFAULT_STORY_SCHEME};
pub use encoding::{decode_component, encode_component};
pub use environment::{
    detect, HandshakeOptions, HostEnvironment, HostHandle, HostProbe, InitResult, ShareMechanism,
};
pub use memory::{HostCall, MemoryNavigator, RecordingHostBridge, StaticHostProbe};
pub use navigation::{Navigator, NoopNavigator};
pub use session::HostSession;
pub use share::{
    build_story_uri, ShareController, ShareError, ShareOutcome, SharePayload, ShareRequest,
};
