//! Callbacks invoked on visibility changes. Closures implement the traits directly; `()` and
//! `None` stand for "no callback".

use crate::prelude::*;



// ==========================
// === VisibilityCallback ===
// ==========================

/// Callback of elements bound with `bind`. Receives the element and whether the call reports the
/// state at binding time (`true`) or a later change (`false`).
pub trait VisibilityCallback<Element> {
    /// Invokes the callback.
    fn call(&mut self, element:&Element, is_initial:bool);
}

impl<Element> VisibilityCallback<Element> for () {
    fn call(&mut self, _element:&Element, _is_initial:bool) {}
}

impl<Element,T:VisibilityCallback<Element>> VisibilityCallback<Element> for Option<T> {
    fn call(&mut self, element:&Element, is_initial:bool) {
        if let Some(f) = self {
            f.call(element,is_initial)
        }
    }
}

impl<Element,F:FnMut(&Element,bool)> VisibilityCallback<Element> for F {
    fn call(&mut self, element:&Element, is_initial:bool) {
        self(element,is_initial)
    }
}



// ====================
// === OnceCallback ===
// ====================

/// Callback of elements bound with `bind_once`. Receives the element only.
pub trait OnceCallback<Element> {
    /// Invokes the callback.
    fn call(&mut self, element:&Element);
}

impl<Element> OnceCallback<Element> for () {
    fn call(&mut self, _element:&Element) {}
}

impl<Element,T:OnceCallback<Element>> OnceCallback<Element> for Option<T> {
    fn call(&mut self, element:&Element) {
        if let Some(f) = self {
            f.call(element)
        }
    }
}

impl<Element,F:FnMut(&Element)> OnceCallback<Element> for F {
    fn call(&mut self, element:&Element) {
        self(element)
    }
}



// =================
// === Callbacks ===
// =================

/// Callback shared by every element a single `bind` call resolved to.
pub type Shared<T> = Rc<RefCell<T>>;

/// The callbacks of a tracked item. Shared between the items created by the same binding.
#[derive(Derivative)]
#[derivative(Clone(bound=""))]
#[derivative(Debug(bound=""))]
pub enum Callbacks<Element> {
    /// Callbacks of a `bind` binding.
    Repeated {
        /// Called when the element shows up.
        #[derivative(Debug="ignore")]
        on_show : Shared<dyn VisibilityCallback<Element>>,
        /// Called when the element gets hidden.
        #[derivative(Debug="ignore")]
        on_hide : Shared<dyn VisibilityCallback<Element>>,
    },
    /// Callbacks of a `bind_once` binding.
    Once {
        /// Called when the element shows up.
        #[derivative(Debug="ignore")]
        on_show : Shared<dyn OnceCallback<Element>>,
        /// Called when the element is hidden at binding time.
        #[derivative(Debug="ignore")]
        on_hide : Shared<dyn OnceCallback<Element>>,
    },
}

impl<Element:'static> Callbacks<Element> {
    /// Callbacks of a `bind` binding.
    pub fn repeated<S,H>(on_show:S, on_hide:H) -> Self
    where S:VisibilityCallback<Element>+'static, H:VisibilityCallback<Element>+'static {
        let on_show : Shared<dyn VisibilityCallback<Element>> = Rc::new(RefCell::new(on_show));
        let on_hide : Shared<dyn VisibilityCallback<Element>> = Rc::new(RefCell::new(on_hide));
        Callbacks::Repeated {on_show,on_hide}
    }

    /// Callbacks of a `bind_once` binding.
    pub fn once<S,H>(on_show:S, on_hide:H) -> Self
    where S:OnceCallback<Element>+'static, H:OnceCallback<Element>+'static {
        let on_show : Shared<dyn OnceCallback<Element>> = Rc::new(RefCell::new(on_show));
        let on_hide : Shared<dyn OnceCallback<Element>> = Rc::new(RefCell::new(on_hide));
        Callbacks::Once {on_show,on_hide}
    }

    /// Whether these are the callbacks of a `bind_once` binding.
    pub fn is_once(&self) -> bool {
        matches!(self,Callbacks::Once{..})
    }

    /// Whether `on_show` is running further up the stack. While it does, `show` is a no-op.
    pub fn is_showing(&self) -> bool {
        match self {
            Callbacks::Repeated {on_show,..} => on_show.try_borrow_mut().is_err(),
            Callbacks::Once     {on_show,..} => on_show.try_borrow_mut().is_err(),
        }
    }

    /// Whether `on_hide` is running further up the stack. While it does, `hide` is a no-op.
    pub fn is_hiding(&self) -> bool {
        match self {
            Callbacks::Repeated {on_hide,..} => on_hide.try_borrow_mut().is_err(),
            Callbacks::Once     {on_hide,..} => on_hide.try_borrow_mut().is_err(),
        }
    }

    /// Reports that the element is visible. Returns `false` when the callback could not be called
    /// because it is already running further up the stack.
    pub fn show(&self, element:&Element, is_initial:bool) -> bool {
        match self {
            Callbacks::Repeated {on_show,..} => call_repeated(on_show,element,is_initial),
            Callbacks::Once     {on_show,..} => call_once(on_show,element),
        }
    }

    /// Reports that the element is hidden. Returns `false` when the callback could not be called
    /// because it is already running further up the stack.
    pub fn hide(&self, element:&Element, is_initial:bool) -> bool {
        match self {
            Callbacks::Repeated {on_hide,..} => call_repeated(on_hide,element,is_initial),
            Callbacks::Once     {on_hide,..} => call_once(on_hide,element),
        }
    }
}

fn call_repeated<Element>
(callback:&Shared<dyn VisibilityCallback<Element>>, element:&Element, is_initial:bool) -> bool {
    callback.try_borrow_mut().map(|mut f| f.call(element,is_initial)).is_ok()
}

fn call_once<Element>(callback:&Shared<dyn OnceCallback<Element>>, element:&Element) -> bool {
    callback.try_borrow_mut().map(|mut f| f.call(element)).is_ok()
}



// =============
// === Tests ===
// =============
