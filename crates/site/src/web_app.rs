use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use story_host::{HandshakeOptions, HostSession, InitResult, ShareController, ShareOutcome};
use story_host_web::{build_share_controller, host_strategy_name, load_story_share_config};

#[cfg(target_arch = "wasm32")]
const STATUS_VISIBLE_FOR: std::time::Duration = std::time::Duration::from_secs(4);

#[derive(Clone, Copy)]
/// Reactive handles shared by the story-share views.
pub struct StoryShareContext {
    /// Whether the host bridging object was detected. Fixed for the page lifetime.
    pub host_available: Signal<bool>,
    /// Caption currently in the editor.
    pub caption: RwSignal<String>,
    /// Outcome of the last share attempt while it is still shown.
    pub status: RwSignal<Option<ShareOutcome>>,
    session: StoredValue<HostSession>,
    controller: StoredValue<ShareController>,
    status_generation: StoredValue<u64>,
}

impl StoryShareContext {
    /// Resolves the host, runs the handshake, and wires the host main button to sharing.
    pub fn install() -> Self {
        let config = load_story_share_config();
        let options = HandshakeOptions::from_config(&config);
        let caption = create_rw_signal(config.default_caption.clone());
        let session = store_value(HostSession::new());
        let controller =
            store_value(session.with_value(|session| build_share_controller(session, config)));

        let context = Self {
            host_available: Signal::derive(move || {
                controller.with_value(ShareController::host_available)
            }),
            caption,
            status: create_rw_signal(None),
            session,
            controller,
            status_generation: store_value(0),
        };

        match session.with_value(|session| session.initialize(&options)) {
            InitResult::Initialized => context.register_main_button(&options),
            InitResult::AlreadyInitialized => {}
            InitResult::HostUnavailable => logging::warn!(
                "story share disabled: host bridge unavailable (strategy: {})",
                host_strategy_name()
            ),
        }
        context
    }

    /// Image shown in the preview and shared to the story.
    pub fn image_url(&self) -> String {
        self.controller
            .with_value(|controller| controller.config().image_url.clone())
    }

    /// Shares the current caption and publishes the outcome as a transient status.
    pub fn share(&self) {
        let caption = self.caption.get_untracked();
        let outcome = self
            .controller
            .with_value(|controller| controller.on_share_requested(&caption));
        self.show_status(outcome);
    }

    fn register_main_button(self, options: &HandshakeOptions) {
        if options.main_button_text.is_none() {
            return;
        }
        let environment = self.session.with_value(HostSession::environment);
        let Some(handle) = environment.handle() else {
            return;
        };
        if let Err(err) = handle
            .bridge()
            .on_main_button_click(Rc::new(move || self.share()))
        {
            logging::warn!("host main button click handler failed: {err}");
        }
    }

    fn show_status(&self, outcome: ShareOutcome) {
        self.status_generation.update_value(|generation| *generation += 1);
        self.status.set(Some(outcome));

        #[cfg(target_arch = "wasm32")]
        {
            let generation = self.status_generation.get_value();
            let status_generation = self.status_generation;
            let status = self.status;
            set_timeout(
                move || {
                    if status_generation.get_value() == generation {
                        status.set(None);
                    }
                },
                STATUS_VISIBLE_FOR,
            );
        }
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let context = StoryShareContext::install();
    provide_context(context);

    view! {
        <Title text="Share Your Story" />
        <Meta name="description" content="Share a captioned banner to your Telegram story." />

        <main class="story-share-root">
            <Show when=move || context.host_available.get() fallback=|| view! { <UnsupportedNotice /> }>
                <StoryComposer />
            </Show>
        </main>
    }
}

#[component]
pub fn StoryComposer() -> impl IntoView {
    let context = expect_context::<StoryShareContext>();
    let image_url = context.image_url();

    view! {
        <section class="story-composer">
            <h1>"📢 Share Your Story"</h1>
            <img src=image_url alt="Referral Banner" width="100%" />
            <textarea
                class="story-caption"
                prop:value=move || context.caption.get()
                on:input=move |ev| context.caption.set(event_target_value(&ev))
            />
            <button class="story-share-button" on:click=move |_| context.share()>
                "📤 Share to Telegram Story"
            </button>
            {move || {
                context
                    .status
                    .get()
                    .map(|outcome| {
                        let class = if outcome.is_invoked() {
                            "story-status story-status-ok"
                        } else {
                            "story-status story-status-error"
                        };
                        view! { <p class=class>{outcome.status_message()}</p> }
                    })
            }}
        </section>
    }
}

#[component]
pub fn UnsupportedNotice() -> impl IntoView {
    view! {
        <section class="story-unsupported">
            <h1>"⚠️ Please open this in Telegram."</h1>
            <p>"Story sharing only works inside the Telegram Mini App."</p>
        </section>
    }
}
