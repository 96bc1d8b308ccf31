//! Session handles from cookies.
//! Server side reads the request `Cookie` header, the browser reads `document.cookie`.

use amc_share::Identifiers;
use leptos::prelude::*;

/// The current session's identifier triple, read once per component instance.
pub fn use_session_identifiers() -> Signal<Identifiers> {
    let ids = read_cookie_header()
        .map(|header| Identifiers::from_cookie_header(&header))
        .unwrap_or_default();
    Signal::stored(ids)
}

#[cfg(feature = "hydrate")]
fn read_cookie_header() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
fn read_cookie_header() -> Option<String> {
    let parts = use_context::<http::request::Parts>()?;
    let header = parts
        .headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ");
    Some(header)
}

// Fallback for when neither feature is enabled (cargo check, unit tests)
#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
fn read_cookie_header() -> Option<String> {
    None
}
