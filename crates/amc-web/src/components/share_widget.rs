//! "Share" button and the dialog showing the sharable link and embed snippets.

use amc_share::{Identifiers, ShareConfig, ShareLinks};
use leptos::prelude::*;

use crate::components::{CopyButton, Modal, ShareIcon};
use crate::config::CONFIG;
use crate::render_context::{RenderContext, use_render_context};

/// Open/closed state of the share dialog.
///
/// The only reachable transitions are closed -> open (trigger) and
/// open -> closed (close action).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShareDialog {
    visible: bool,
}

impl ShareDialog {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_open(self) -> bool {
        self.visible
    }
}

/// Links derived from the identifier triple, recomputed only when the
/// triple actually changes.
pub fn use_share_links(identifiers: Signal<Identifiers>, config: ShareConfig) -> Memo<ShareLinks> {
    // Memo dedups equal values, so re-sending the same triple does not
    // invalidate the links below.
    let ids = Memo::new(move |_| identifiers.get());
    Memo::new(move |_| ids.with(|ids| ShareLinks::derive(ids, &config)))
}

/// Share trigger plus dialog. Renders nothing until `render_context` is
/// [`RenderContext::Browser`].
#[component]
pub fn ShareWidget(
    /// Session handles the links are built from
    #[prop(into)]
    identifiers: Signal<Identifiers>,
    /// Link targets; defaults to the embedded site config
    #[prop(optional)]
    config: Option<ShareConfig>,
    /// Defaults to detecting mount in a browser document
    #[prop(optional, into)]
    render_context: Option<Signal<RenderContext>>,
    /// Dialog state, for callers that open or close it themselves
    #[prop(optional)]
    dialog: Option<RwSignal<ShareDialog>>,
) -> impl IntoView {
    let config = config.unwrap_or_else(|| CONFIG.clone());
    let render_context = render_context.unwrap_or_else(use_render_context);
    let dialog = dialog.unwrap_or_else(|| RwSignal::new(ShareDialog::default()));
    let links = use_share_links(identifiers, config);

    view! {
        <Show when=move || render_context.get().is_browser()>
            <button
                type="button"
                class="share-trigger"
                aria-haspopup="dialog"
                on:click=move |_| dialog.update(ShareDialog::open)
            >
                <ShareIcon />
                " Share"
            </button>
            <Show when=move || dialog.get().is_open()>
                <Modal title="Share" on_close=move |_| dialog.update(ShareDialog::close)>
                    <ShareDialogBody links=links />
                </Modal>
            </Show>
        </Show>
    }
}

/// The three share displays, each with a copy button.
#[component]
pub fn ShareDialogBody(#[prop(into)] links: Signal<ShareLinks>) -> impl IntoView {
    let url = Signal::derive(move || links.with(|l| l.sharable_url.clone()));
    let iframe = Signal::derive(move || links.with(|l| l.iframe_snippet.clone()));
    let script = Signal::derive(move || links.with(|l| l.script_snippet.clone()));

    view! {
        <ShareField id="share-link" label="Sharable link" value=url />
        <ShareField id="share-iframe" label="Embed with an iframe" value=iframe />
        <ShareField id="share-script" label="Embed with a script tag" value=script />
    }
}

#[component]
fn ShareField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="share-field" id=id>
            <div class="share-field-label">{label}</div>
            <pre class="share-field-value"><code>{move || value.get()}</code></pre>
            <CopyButton text=value label="Copy" />
        </div>
    }
}
