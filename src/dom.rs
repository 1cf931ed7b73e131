//! Result-bearing DOM lookups and listener wiring.
//!
//! Every lookup reports exactly which element is missing, so the page can
//! disable just the feature that needs it. This module is the only place
//! that converts [`JsValue`] errors into [`DomError`].

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

/// Failure to reach a DOM element or complete a DOM call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    /// A required element did not match its selector.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },
    /// A web API call threw.
    #[error("dom call failed: {0}")]
    Js(String),
}

impl DomError {
    pub(crate) fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// # Errors
///
/// Returns [`DomError::NoWindow`] outside a browser main thread.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// # Errors
///
/// Returns [`DomError::NoDocument`] when the window has no document.
pub fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

/// # Errors
///
/// Returns [`DomError::NoBody`] when the document has no `<body>`.
pub fn body(document: &Document) -> Result<HtmlElement, DomError> {
    document.body().ok_or(DomError::NoBody)
}

/// Element with `id`, as an [`HtmlElement`].
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] naming `#id` when absent.
pub fn by_id(document: &Document, id: &str) -> Result<HtmlElement, DomError> {
    let selector = format!("#{id}");
    let element = document.get_element_by_id(id).ok_or_else(|| DomError::missing(&selector))?;
    element.dyn_into::<HtmlElement>().map_err(|_| DomError::missing(selector))
}

/// First descendant of `parent` matching `selector`.
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] when nothing matches, or
/// [`DomError::Js`] when `selector` is invalid.
pub fn query(parent: &Element, selector: &str) -> Result<Element, DomError> {
    parent.query_selector(selector)?.ok_or_else(|| DomError::missing(selector))
}

/// First element in `document` matching `selector`.
///
/// # Errors
///
/// Same as [`query`].
pub fn query_document(document: &Document, selector: &str) -> Result<Element, DomError> {
    document.query_selector(selector)?.ok_or_else(|| DomError::missing(selector))
}

/// All elements in `document` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`DomError::Js`] when `selector` is invalid. No match is an empty list.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect())
}

/// Attach `handler` to `event` on `target` for the life of the page.
///
/// Listeners are installed once at mount and never removed, so the closure
/// is leaked.
///
/// # Errors
///
/// Returns [`DomError::Js`] if the listener could not be added.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Log a failed best-effort DOM write instead of discarding it.
pub fn warn_on_err<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {}", DomError::from(err));
    }
}
