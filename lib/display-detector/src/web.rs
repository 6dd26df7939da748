//! Browser integration. `WebEnvironment` implements `Environment` with `web-sys`, and
//! `DisplayDetector` runs a `Tracker` on it, triggered by the `resize` and `scroll` events of the
//! window and by the `scroll` events of every scroll container clipping a bound element.

use crate::prelude::*;

use crate::callback::OnceCallback;
use crate::callback::VisibilityCallback;
use crate::config::Config;
use crate::environment::ComputedStyle;
use crate::environment::Environment;
use crate::environment::Position;
use crate::geometry::Rectangle;
use crate::target::Target;
use crate::tracker::Tracker;

use detector_system_web as web;
use detector_system_web::closure::OptionalFnMutClosure;
use detector_system_web::event::EventListener;
use detector_system_web::event::OnResize;
use detector_system_web::event::OnScroll;
use js_sys::Function;
use web_sys::Element;



// ===============
// === Targets ===
// ===============

impl From<Element> for Target<Element> {
    fn from(element:Element) -> Self {
        Target::Element(element)
    }
}

impl From<&Element> for Target<Element> {
    fn from(element:&Element) -> Self {
        Target::Element(element.clone())
    }
}



// ======================
// === WebEnvironment ===
// ======================

/// `Environment` backed by the browser document. Failing browser calls are logged and degrade to
/// neutral values: an empty viewport, a non-clipping style, no matching elements.
#[derive(Debug)]
pub struct WebEnvironment {
    logger           : Logger,
    capture          : bool,
    listener         : RefCell<Option<Function>>,
    scroll_listeners : RefCell<Vec<EventListener<OnScroll>>>,
}

impl WebEnvironment {
    /// Constructor. Scroll containers are not watched until `set_listener` is called.
    pub fn new(parent:impl AnyLogger, capture:bool) -> Self {
        let logger           = Logger::sub(parent,"WebEnvironment");
        let listener         = default();
        let scroll_listeners = default();
        Self {logger,capture,listener,scroll_listeners}
    }

    /// Sets the function attached to the `scroll` events of watched containers.
    pub fn set_listener(&self, function:&Function) {
        *self.listener.borrow_mut() = Some(function.clone());
    }

    /// Number of containers whose scroll events are currently listened to.
    pub fn scroll_listener_count(&self) -> usize {
        self.scroll_listeners.borrow().len()
    }

    fn read_style(element:&Element) -> web::Result<ComputedStyle> {
        let style      = web::computed_style(element)?;
        let overflow   = web::style_property(&style,"overflow")?;
        let overflow_x = web::style_property(&style,"overflow-x")?;
        let overflow_y = web::style_property(&style,"overflow-y")?;
        let position   = Position::from_css(&web::style_property(&style,"position")?);
        Ok(ComputedStyle {overflow,overflow_x,overflow_y,position})
    }
}

impl Environment for WebEnvironment {
    type Element = Element;

    fn viewport(&self) -> Rectangle {
        match web::viewport_size() {
            Ok((width,height)) => Rectangle::viewport(width,height),
            Err(error)         => {
                logger::warning!(self.logger,"Cannot read the viewport size: {error}");
                Rectangle::viewport(0.0,0.0)
            }
        }
    }

    fn bounding_rect(&self, element:&Element) -> Rectangle {
        let rect = element.get_bounding_client_rect();
        Rectangle::new(rect.x(),rect.y(),rect.width(),rect.height())
    }

    fn parent(&self, element:&Element) -> Option<Element> {
        element.parent_element()
    }

    fn computed_style(&self, element:&Element) -> ComputedStyle {
        Self::read_style(element).unwrap_or_else(|error| {
            logger::warning!(self.logger,"Cannot read the style of {element:?}: {error}");
            default()
        })
    }

    fn query_all(&self, selector:&str) -> Vec<Element> {
        web::query_selector_all(selector).unwrap_or_else(|error| {
            logger::warning!(self.logger,"{error}");
            default()
        })
    }

    fn watch_scroll(&self, element:&Element) {
        let listener = self.listener.borrow();
        if let Some(function) = listener.as_ref() {
            match EventListener::attach(&self.logger,element,function,self.capture) {
                Ok(listener) => self.scroll_listeners.borrow_mut().push(listener),
                Err(error)   => logger::warning!(self.logger,"Cannot watch {element:?}: {error}"),
            }
        }
    }

    fn unwatch_scroll(&self, element:&Element) {
        let target : &web_sys::EventTarget = element.as_ref();
        self.scroll_listeners.borrow_mut().retain(|listener| listener.target() != target);
    }
}



// =======================
// === DisplayDetector ===
// =======================

/// Detects visibility changes of DOM elements in the browser.
///
/// Outside of a browser window every operation is a no-op.
#[derive(Debug)]
pub struct DisplayDetector {
    logger : Logger,
    model  : Option<Model>,
}

#[derive(Debug)]
struct Model {
    tracker   : Tracker<WebEnvironment>,
    on_resize : EventListener<OnResize>,
    on_scroll : EventListener<OnScroll>,
    detect    : OptionalFnMutClosure<web_sys::Event>,
}

impl Model {
    fn new(logger:&Logger, config:Config) -> web::Result<Self> {
        let window = web::window()?;
        web::set_panic_hook();
        let capture     = config.capture_events;
        let environment = WebEnvironment::new(logger,capture);
        let tracker     = Tracker::new(logger,environment,config);
        let weak        = tracker.downgrade();
        let detect      = OptionalFnMutClosure::new(move |_:web_sys::Event| {
            if let Some(tracker) = weak.upgrade() { tracker.detect() }
        });
        let function  = detect.js_ref().ok_or_else(|| web::Error::missing("detect closure"))?;
        tracker.environment().set_listener(function);
        let on_resize = EventListener::attach(logger,&window,function,capture)?;
        let on_scroll = EventListener::attach(logger,&window,function,capture)?;
        Ok(Self {tracker,on_resize,on_scroll,detect})
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.tracker.clear();
    }
}

impl Default for DisplayDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayDetector {
    /// Installs a detector with the default configuration.
    pub fn new() -> Self {
        Self::new_with_config(default())
    }

    /// Installs a detector. When there is no browser window, a warning is logged and an inactive
    /// detector is returned.
    pub fn new_with_config(config:Config) -> Self {
        let logger = Logger::new_with_level("DisplayDetector",config.log_level);
        let model  = match Model::new(&logger,config) {
            Ok(model)  => Some(model),
            Err(error) => {
                logger::warning!(logger,"Display detection is disabled: {error}");
                None
            }
        };
        Self {logger,model}
    }

    /// Whether the detector runs in a browser window.
    pub fn is_active(&self) -> bool {
        self.model.is_some()
    }

    /// The underlying tracker, if the detector is active.
    pub fn tracker(&self) -> Option<&Tracker<WebEnvironment>> {
        self.model.as_ref().map(|model| &model.tracker)
    }

    /// See `Tracker::bind`.
    pub fn bind<S,H>(&self, target:impl Into<Target<Element>>, on_show:S, on_hide:H)
    where S : VisibilityCallback<Element> + 'static,
          H : VisibilityCallback<Element> + 'static {
        if let Some(tracker) = self.tracker() { tracker.bind(target,on_show,on_hide) }
    }

    /// See `Tracker::bind_once`.
    pub fn bind_once<S,H>(&self, target:impl Into<Target<Element>>, on_show:S, on_hide:H)
    where S : OnceCallback<Element> + 'static,
          H : OnceCallback<Element> + 'static {
        if let Some(tracker) = self.tracker() { tracker.bind_once(target,on_show,on_hide) }
    }

    /// See `Tracker::unbind`.
    pub fn unbind(&self, target:impl Into<Target<Element>>) {
        if let Some(tracker) = self.tracker() { tracker.unbind(target) }
    }

    /// See `Tracker::is_bound`.
    pub fn is_bound(&self, target:impl Into<Target<Element>>) -> bool {
        self.tracker().map(|tracker| tracker.is_bound(target)).unwrap_or(false)
    }

    /// Recomputes the visibility of every bound element. Runs automatically on window resize and
    /// scroll; call it after changing the layout by other means.
    pub fn detect(&self) {
        match self.tracker() {
            Some(tracker) => tracker.detect(),
            None          => logger::trace!(self.logger,"Inactive, nothing to detect."),
        }
    }
}



// =============
// === Tests ===
// =============
