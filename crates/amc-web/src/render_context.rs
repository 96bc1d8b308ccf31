//! Whether a live document is available to render interactive UI into.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderContext {
    /// Server render, or a client that has not mounted yet.
    #[default]
    Headless,
    /// Mounted in a browser document.
    Browser,
}

impl RenderContext {
    pub fn is_browser(self) -> bool {
        matches!(self, Self::Browser)
    }
}

/// Starts `Headless` and flips to `Browser` once mounted.
///
/// Effects never run during SSR, so the server and the first client render
/// agree and hydration stays consistent.
pub fn use_render_context() -> Signal<RenderContext> {
    let (context, set_context) = signal(RenderContext::Headless);
    Effect::new(move |_| set_context.set(RenderContext::Browser));
    context.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_headless() {
        assert_eq!(RenderContext::default(), RenderContext::Headless);
        assert!(!RenderContext::Headless.is_browser());
        assert!(RenderContext::Browser.is_browser());
    }

    #[test]
    fn stays_headless_without_a_browser() {
        let owner = Owner::new();
        owner.with(|| {
            let context = use_render_context();
            assert_eq!(context.get_untracked(), RenderContext::Headless);
        });
    }
}
