//! The visibility tracker. Keeps the bound elements with their last known visibility and turns
//! repeated visibility checks into show/hide callbacks.

use crate::prelude::*;

use crate::callback::Callbacks;
use crate::callback::OnceCallback;
use crate::callback::VisibilityCallback;
use crate::config::Config;
use crate::config::DuplicateBinding;
use crate::environment::Environment;
use crate::geometry;
use crate::geometry::Ancestors;
use crate::geometry::VisiblePart;
use crate::registry::ScrollRegistry;
use crate::target::Target;

use std::mem;



// ===================
// === TrackedItem ===
// ===================

/// An element bound to the tracker.
///
/// Items are shared with in-flight `detect` passes. Removing an item from the tracker marks it
/// inactive, so a pass iterating an older snapshot skips it.
#[derive(Debug)]
pub struct TrackedItem<Element> {
    element   : Element,
    callbacks : Callbacks<Element>,
    is_shown  : Cell<bool>,
    is_active : Cell<bool>,
    ancestors : RefCell<Ancestors<Element>>,
}

impl<Element:Clone+Debug+PartialEq+'static> TrackedItem<Element> {
    fn new(element:Element, callbacks:Callbacks<Element>, is_shown:bool) -> Rc<Self> {
        let is_shown  = Cell::new(is_shown);
        let is_active = Cell::new(true);
        let ancestors = default();
        Rc::new(Self {element,callbacks,is_shown,is_active,ancestors})
    }

    /// The tracked element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Whether the item unbinds itself once the element shows up.
    pub fn is_once(&self) -> bool {
        self.callbacks.is_once()
    }

    /// The visibility computed by the last check.
    pub fn is_shown(&self) -> bool {
        self.is_shown.get()
    }
}



// =============
// === Model ===
// =============

#[derive(Derivative)]
#[derivative(Debug(bound=""))]
struct Model<Env:Environment> {
    logger      : Logger,
    config      : Config,
    #[derivative(Debug="ignore")]
    environment : Env,
    items       : RefCell<Vec<Rc<TrackedItem<Env::Element>>>>,
    registry    : RefCell<ScrollRegistry<Env::Element>>,
}



// ===============
// === Tracker ===
// ===============

/// Tracks the visibility of bound elements.
///
/// This is a cheap handle, clones refer to the same tracker. No internal borrow is held while a
/// callback runs, so callbacks are free to bind, unbind or run `detect` again. A callback already
/// running further up the stack is not re-entered; such nested calls are skipped.
#[derive(Derivative)]
#[derivative(Clone(bound=""))]
#[derivative(Debug(bound=""))]
pub struct Tracker<Env:Environment> {
    model : Rc<Model<Env>>,
}

/// Weak version of `Tracker`, used by event listeners to avoid reference cycles.
#[derive(Derivative)]
#[derivative(Clone(bound=""))]
#[derivative(Debug(bound=""))]
pub struct WeakTracker<Env:Environment> {
    model : Weak<Model<Env>>,
}

impl<Env:Environment> WeakTracker<Env> {
    /// Upgrades to a strong handle if the tracker still exists.
    pub fn upgrade(&self) -> Option<Tracker<Env>> {
        self.model.upgrade().map(|model| Tracker {model})
    }
}

impl<Env:Environment> Tracker<Env> {
    /// Constructor.
    pub fn new(parent:impl AnyLogger, environment:Env, config:Config) -> Self {
        let logger   = Logger::sub(parent,"Tracker");
        let items    = default();
        let registry = ScrollRegistry::new(&logger,config.prune_scroll_ancestors);
        let registry = RefCell::new(registry);
        let model    = Rc::new(Model {logger,config,environment,items,registry});
        Self {model}
    }

    /// Creates a weak handle.
    pub fn downgrade(&self) -> WeakTracker<Env> {
        WeakTracker {model:Rc::downgrade(&self.model)}
    }

    /// The environment the tracker observes.
    pub fn environment(&self) -> &Env {
        &self.model.environment
    }

    /// The configuration the tracker was created with.
    pub fn config(&self) -> &Config {
        &self.model.config
    }

    /// Number of tracked items.
    pub fn len(&self) -> usize {
        self.model.items.borrow().len()
    }

    /// Checks whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.model.items.borrow().is_empty()
    }

    /// Checks whether any element of the target is tracked.
    pub fn is_bound(&self, target:impl Into<Target<Env::Element>>) -> bool {
        let elements = target.into().resolve(self.environment());
        elements.iter().any(|element| self.is_tracked(element))
    }

    /// Checks whether the scroll events of the element are watched.
    pub fn is_scroll_watched(&self, element:&Env::Element) -> bool {
        self.model.registry.borrow().contains(element)
    }

    /// Binds the elements of the target. For every element not tracked yet, `on_show` or
    /// `on_hide` is called right away with `is_initial` set, and later on every visibility change
    /// with `is_initial` unset.
    pub fn bind<S,H>(&self, target:impl Into<Target<Env::Element>>, on_show:S, on_hide:H)
    where S : VisibilityCallback<Env::Element> + 'static,
          H : VisibilityCallback<Env::Element> + 'static {
        let callbacks = Callbacks::repeated(on_show,on_hide);
        for element in target.into().resolve(self.environment()) {
            if !self.admit(&element) { continue }
            let part     = self.visible_part(&element);
            let is_shown = part.is_visible();
            logger::debug!(self.model.logger,"Binding {element:?} (shown: {is_shown}).");
            let item = TrackedItem::new(element,callbacks.clone(),is_shown);
            self.insert(&item,part.ancestors);
            if is_shown { item.callbacks.show(&item.element,true); }
            else        { item.callbacks.hide(&item.element,true); }
        }
    }

    /// Binds the elements of the target until they show up. Elements already visible get
    /// `on_show` called right away and are not tracked at all. The others get `on_hide` called
    /// right away, and `on_show` once they show up, after which they are unbound.
    pub fn bind_once<S,H>(&self, target:impl Into<Target<Env::Element>>, on_show:S, on_hide:H)
    where S : OnceCallback<Env::Element> + 'static,
          H : OnceCallback<Env::Element> + 'static {
        let callbacks = Callbacks::once(on_show,on_hide);
        for element in target.into().resolve(self.environment()) {
            if !self.admit(&element) { continue }
            let part = self.visible_part(&element);
            if part.is_visible() {
                logger::debug!(self.model.logger,"{element:?} is already shown, not binding it.");
                callbacks.show(&element,true);
            } else {
                logger::debug!(self.model.logger,"Binding {element:?} once.");
                let item = TrackedItem::new(element,callbacks.clone(),false);
                self.insert(&item,part.ancestors);
                item.callbacks.hide(&item.element,true);
            }
        }
    }

    /// Stops tracking the elements of the target. No callback is called. Elements that are not
    /// tracked are ignored.
    pub fn unbind(&self, target:impl Into<Target<Env::Element>>) {
        let elements = target.into().resolve(self.environment());
        let removed  = self.remove_where(|item| elements.contains(&item.element));
        for item in &removed {
            logger::debug!(self.model.logger,"Unbound {:?}.",item.element);
        }
    }

    /// Stops tracking every element and unwatches every scroll container.
    pub fn clear(&self) {
        let removed = self.remove_where(|_| true);
        self.model.registry.borrow_mut().clear(self.environment());
        logger::debug!(self.model.logger,"Cleared {} item(s).",removed.len());
    }

    /// Recomputes the visibility of every tracked element and calls the callbacks of the elements
    /// whose visibility changed since the previous check.
    ///
    /// A change whose callback is already running further up the stack is not recorded here. It is
    /// delivered by the outer pass once it reaches the element, or by the next `detect`.
    pub fn detect(&self) {
        let snapshot = self.model.items.borrow().clone();
        for item in snapshot {
            if !item.is_active.get() { continue }
            let part      = self.visible_part(&item.element);
            let is_shown  = part.is_visible();
            let was_shown = item.is_shown.get();
            self.update_ancestors(&item,part.ancestors);
            if is_shown && !was_shown {
                // Left pending for the pass that is running the callback.
                if item.callbacks.is_showing() { continue }
                logger::trace!(self.model.logger,"{:?} has been shown.",item.element);
                if item.is_once() {
                    self.remove(&item);
                }
                item.callbacks.show(&item.element,false);
            } else if !is_shown && was_shown {
                if item.callbacks.is_hiding() { continue }
                logger::trace!(self.model.logger,"{:?} has been hidden.",item.element);
                item.callbacks.hide(&item.element,false);
            }
            item.is_shown.set(is_shown);
        }
    }
}


// === Private API ===

impl<Env:Environment> Tracker<Env> {
    fn visible_part(&self, element:&Env::Element) -> VisiblePart<Env::Element> {
        let respect_positioning = self.model.config.respect_positioning;
        geometry::visible_part(self.environment(),element,respect_positioning)
    }

    fn is_tracked(&self, element:&Env::Element) -> bool {
        self.model.items.borrow().iter().any(|item| &item.element == element)
    }

    /// Applies the duplicate binding policy. Returns whether the element should be bound.
    fn admit(&self, element:&Env::Element) -> bool {
        if !self.is_tracked(element) { return true }
        match self.model.config.duplicate_binding {
            DuplicateBinding::Allow   => true,
            DuplicateBinding::Ignore  => {
                logger::debug!(self.model.logger,"{element:?} is already bound, ignoring.");
                false
            }
            DuplicateBinding::Replace => {
                logger::debug!(self.model.logger,"{element:?} is already bound, replacing.");
                let replaced = self.remove_where(|item| &item.element == element);
                logger::trace!(self.model.logger,"Replaced {} item(s).",replaced.len());
                true
            }
        }
    }

    fn insert(&self, item:&Rc<TrackedItem<Env::Element>>, ancestors:Ancestors<Env::Element>) {
        self.model.registry.borrow_mut().acquire_all(self.environment(),&ancestors);
        *item.ancestors.borrow_mut() = ancestors;
        self.model.items.borrow_mut().push(item.clone());
    }

    fn remove(&self, item:&Rc<TrackedItem<Env::Element>>) {
        self.remove_where(|other| Rc::ptr_eq(other,item));
    }

    /// Removes matching items, deactivates them and releases their scroll containers.
    fn remove_where<F>(&self, f:F) -> Vec<Rc<TrackedItem<Env::Element>>>
    where F:Fn(&Rc<TrackedItem<Env::Element>>) -> bool {
        let removed : Vec<_> = {
            let mut items = self.model.items.borrow_mut();
            let (removed,kept) : (Vec<_>,Vec<_>) = mem::take(&mut *items).into_iter().partition(|item| f(item));
            *items = kept;
            removed
        };
        let mut registry = self.model.registry.borrow_mut();
        for item in &removed {
            item.is_active.set(false);
            let ancestors = mem::take(&mut *item.ancestors.borrow_mut());
            registry.release_all(self.environment(),&ancestors);
        }
        removed
    }

    /// Moves the scroll container registrations of the item to a new chain.
    fn update_ancestors(&self, item:&TrackedItem<Env::Element>, ancestors:Ancestors<Env::Element>) {
        if *item.ancestors.borrow() == ancestors { return }
        let mut registry = self.model.registry.borrow_mut();
        registry.acquire_all(self.environment(),&ancestors);
        let previous = mem::replace(&mut *item.ancestors.borrow_mut(),ancestors);
        registry.release_all(self.environment(),&previous);
    }
}



// =============
// === Tests ===
// =============
