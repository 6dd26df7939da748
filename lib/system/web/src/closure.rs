//! Storage for Rust closures exposed to JavaScript. The closure must outlive every JavaScript
//! reference to it, so whoever registers it as a listener keeps the storage alive.

use detector_prelude::*;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::Closure;



// =============================
// === OptionalFnMutClosure ===
// =============================

/// A slot for an `FnMut(Arg)` closure callable from JavaScript.
#[derive(Derivative)]
#[derivative(Debug(bound=""))]
#[derivative(Default(bound=""))]
pub struct OptionalFnMutClosure<Arg> {
    closure : Option<Closure<dyn FnMut(Arg)>>,
}

impl<Arg:FromWasmAbi+'static> OptionalFnMutClosure<Arg> {
    /// Creates a storage with the closure already set.
    pub fn new(f:impl FnMut(Arg)+'static) -> Self {
        let mut this = Self::default();
        this.wrap(f);
        this
    }

    /// Replaces the stored closure and returns the JavaScript function bound to it. Listeners
    /// registered with the previous function stop working once it is dropped here.
    pub fn wrap(&mut self, f:impl FnMut(Arg)+'static) -> &Function {
        let boxed   : Box<dyn FnMut(Arg)> = Box::new(f);
        let closure : &Closure<dyn FnMut(Arg)> = self.closure.insert(Closure::wrap(boxed));
        closure.as_ref().unchecked_ref()
    }

    /// The JavaScript function of the stored closure, if any.
    pub fn js_ref(&self) -> Option<&Function> {
        self.closure.as_ref().map(|closure| closure.as_ref().unchecked_ref())
    }

    /// Drops the stored closure.
    pub fn clear(&mut self) {
        self.closure = None;
    }

    /// Checks whether a closure is stored.
    pub fn is_set(&self) -> bool {
        self.closure.is_some()
    }
}
