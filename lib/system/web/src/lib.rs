//! Thin, fallible helpers over `web-sys`. Everything that touches the browser goes through this
//! crate, so the rest of the workspace never has to deal with `JsValue` errors directly.

#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(unused_import_braces)]

pub mod closure;
pub mod event;

use detector_prelude::*;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

pub use web_sys::CssStyleDeclaration;
pub use web_sys::Document;
pub use web_sys::DomRect;
pub use web_sys::Element;
pub use web_sys::EventTarget;
pub use web_sys::Window;



// =============
// === Error ===
// =============

/// Failures of browser API calls.
#[derive(Clone,Debug,Fail)]
pub enum Error {
    /// A browser object we rely on is not available, e.g. when running outside of a window.
    #[fail(display = "Missing {}.", _0)]
    Missing(String),
    /// The selector could not be parsed by `querySelectorAll`.
    #[fail(display = "Invalid selector {:?}: {}.", selector, message)]
    InvalidSelector {
        /// The offending selector.
        selector : String,
        /// The exception message reported by the browser.
        message  : String,
    },
    /// A browser call threw a JavaScript exception.
    #[fail(display = "JavaScript exception: {}.", _0)]
    Js(String),
    /// A JavaScript object had an unexpected type.
    #[fail(display = "Cannot cast JavaScript object to {}.", _0)]
    TypeMismatch(String),
}

impl Error {
    /// Constructor of the `Missing` variant.
    pub fn missing(what:impl Str) -> Self {
        Error::Missing(what.as_ref().into())
    }

    /// Constructs from an exception thrown by a browser call.
    pub fn js(exception:JsValue) -> Self {
        Error::Js(js_to_string(&exception))
    }
}

/// Result of browser API calls.
pub type Result<T> = std::result::Result<T,Error>;



// ===============
// === Globals ===
// ===============

/// Access the `window` object. Fails when there is no window, which is always the case when not
/// compiled for the browser.
#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::missing("window"))
}

/// Access the `window` object. Fails when there is no window, which is always the case when not
/// compiled for the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window> {
    Err(Error::missing("window"))
}

/// Access the `document` object.
pub fn document() -> Result<Document> {
    window()?.document().ok_or_else(|| Error::missing("document"))
}

/// Installs a panic hook forwarding Rust panics to the browser console.
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}



// ===============
// === Casting ===
// ===============

/// Converts a JavaScript value to a human-readable string.
pub fn js_to_string(value:&JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}",value))
}

/// Casts a JavaScript object to another JavaScript type, checking the type at runtime.
pub fn dyn_into<T,U>(obj:T) -> Result<U>
where T:JsCast, U:JsCast {
    obj.dyn_into().map_err(|_| Error::TypeMismatch(std::any::type_name::<U>().into()))
}



// ===============
// === Queries ===
// ===============

/// All elements of the document matching the CSS selector, in document order.
pub fn query_selector_all(selector:&str) -> Result<Vec<Element>> {
    let document = document()?;
    let nodes    = document.query_selector_all(selector).map_err(|exception| {
        let selector = selector.into();
        let message  = js_to_string(&exception);
        Error::InvalidSelector {selector,message}
    })?;
    let nodes = (0..nodes.length()).filter_map(|index| nodes.item(index));
    Ok(nodes.filter_map(|node| node.dyn_into::<Element>().ok()).collect())
}

/// The computed style of the element, as resolved by the browser.
pub fn computed_style(element:&Element) -> Result<CssStyleDeclaration> {
    window()?.get_computed_style(element).map_err(Error::js)?
        .ok_or_else(|| Error::missing("computed style"))
}

/// Reads a single property of a computed style. Unknown properties read as an empty string.
pub fn style_property(style:&CssStyleDeclaration, name:&str) -> Result<String> {
    style.get_property_value(name).map_err(Error::js)
}

/// Width and height of the window's layout viewport, in CSS pixels.
pub fn viewport_size() -> Result<(f64,f64)> {
    let window = window()?;
    let number = |value:JsValue, name:&str| {
        value.as_f64().ok_or_else(|| Error::TypeMismatch(format!("number ({})",name)))
    };
    let width  = number(window.inner_width().map_err(Error::js)?,"innerWidth")?;
    let height = number(window.inner_height().map_err(Error::js)?,"innerHeight")?;
    Ok((width,height))
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn window_is_missing_outside_of_browser() {
        assert!(matches!(window(),Err(Error::Missing(_))));
        assert!(matches!(document(),Err(Error::Missing(_))));
        assert!(query_selector_all(".box").is_err());
    }

    #[test]
    fn errors_are_displayed() {
        let error = Error::InvalidSelector {selector:"#".into(), message:"bad".into()};
        assert_eq!(error.to_string(),"Invalid selector \"#\": bad.");
        assert_eq!(Error::missing("window").to_string(),"Missing window.");
    }
}
