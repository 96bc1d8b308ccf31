use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const COPIED_FEEDBACK_MS: u32 = 2000;

/// A button that copies text to clipboard with visual feedback
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: Signal<String>,
    /// Button label (shown before copy)
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        copy_to_clipboard(text.get_untracked(), copied);
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    view! {
        <button type="button" class="copy-button" on:click=on_click>
            {move || if copied.get() { "Copied!".to_string() } else { label.clone() }}
        </button>
    }
}

#[cfg(feature = "hydrate")]
fn copy_to_clipboard(text: String, copied: RwSignal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);

    leptos::task::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => {
                copied.set(true);
                // The button may be gone by the time this fires
                gloo_timers::callback::Timeout::new(COPIED_FEEDBACK_MS, move || {
                    let _ = copied.try_set(false);
                })
                .forget();
            }
            Err(e) => web_sys::console::error_1(&e),
        }
    });
}
