//! Typed DOM event listeners. A listener is attached when created and detached when dropped.

use crate::*;

use js_sys::Function;
use logger::AnyLogger;
use logger::Logger;
use std::marker::PhantomData;



// ===============
// === JsEvent ===
// ===============

/// A DOM event type, identified by its name.
pub trait JsEvent {
    /// Type of the event object passed to the listener.
    type Arg;
    /// Name of the event, as used by `addEventListener`.
    const NAME:&'static str;

    /// Registers the function as a listener of this event on the target.
    fn add_listener(target:&EventTarget, listener:&Function, capture:bool) -> Result<()> {
        target.add_event_listener_with_callback_and_bool(Self::NAME,listener,capture)
            .map_err(Error::js)
    }

    /// Unregisters the function. Both `listener` and `capture` must match the registration.
    fn remove_listener(target:&EventTarget, listener:&Function, capture:bool) -> Result<()> {
        target.remove_event_listener_with_callback_and_bool(Self::NAME,listener,capture)
            .map_err(Error::js)
    }
}

/// The `resize` event of the window.
#[derive(Clone,Copy,Debug,Default)]
pub struct OnResize;
impl JsEvent for OnResize {
    type Arg = web_sys::Event;
    const NAME:&'static str = "resize";
}

/// The `scroll` event of the window or of a scrollable element. It does not bubble.
#[derive(Clone,Copy,Debug,Default)]
pub struct OnScroll;
impl JsEvent for OnScroll {
    type Arg = web_sys::Event;
    const NAME:&'static str = "scroll";
}



// =====================
// === EventListener ===
// =====================

/// A JavaScript function registered as a listener of `Event` on a target. The registration lives
/// as long as this value. The function itself is not owned: the caller keeps the closure behind it
/// alive for at least as long.
#[derive(Debug)]
pub struct EventListener<Event:JsEvent> {
    logger   : Logger,
    target   : EventTarget,
    function : Function,
    capture  : bool,
    event    : PhantomData<Event>,
}

impl<Event:JsEvent> EventListener<Event> {
    /// Attaches the function to the target.
    pub fn attach
    (parent:impl AnyLogger, target:&EventTarget, function:&Function, capture:bool)
    -> Result<Self> {
        let logger   = Logger::sub(parent,Event::NAME);
        let target   = target.clone();
        let function = function.clone();
        let event    = PhantomData;
        Event::add_listener(&target,&function,capture)?;
        logger::trace!(logger,"Attached listener (capture: {capture}).");
        Ok(Self {logger,target,function,capture,event})
    }

    /// The target this listener is attached to.
    pub fn target(&self) -> &EventTarget {
        &self.target
    }
}

impl<Event:JsEvent> Drop for EventListener<Event> {
    fn drop(&mut self) {
        match Event::remove_listener(&self.target,&self.function,self.capture) {
            Ok(())     => logger::trace!(self.logger,"Detached listener."),
            Err(error) => logger::warning!(self.logger,"Failed to detach listener: {error}"),
        }
    }
}
