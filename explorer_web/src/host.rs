use explorer_core::RenderError;
use web_sys::{Document, HtmlElement, HtmlHeadElement};

pub fn document() -> Result<Document, RenderError> {
    let window = web_sys::window().ok_or(RenderError::MissingHost("window"))?;
    window.document().ok_or(RenderError::MissingHost("document"))
}

/// Where overlays get mounted.
pub fn body() -> Result<HtmlElement, RenderError> {
    document()?.body().ok_or(RenderError::MissingHost("body"))
}

pub fn head() -> Result<HtmlHeadElement, RenderError> {
    document()?.head().ok_or(RenderError::MissingHost("head"))
}
