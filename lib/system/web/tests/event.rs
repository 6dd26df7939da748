#![cfg(target_arch = "wasm32")]

use detector_system_web::*;
use detector_system_web::closure::OptionalFnMutClosure;
use detector_system_web::event::EventListener;
use detector_system_web::event::OnScroll;
use logger::Logger;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn dispatch_scroll(target:&Element) {
    let event = web_sys::Event::new("scroll").unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn listener_is_detached_on_drop() {
    let element = document().unwrap().create_element("div").unwrap();
    let counter = Rc::new(Cell::new(0));
    let closure = OptionalFnMutClosure::new({
        let counter = counter.clone();
        move |_:web_sys::Event| counter.set(counter.get() + 1)
    });
    let function = closure.js_ref().unwrap();
    let listener = EventListener::<OnScroll>::attach(Logger::new("test"),&element,function,false);
    let listener = listener.unwrap();

    dispatch_scroll(&element);
    assert_eq!(counter.get(),1);
    drop(listener);
    dispatch_scroll(&element);
    assert_eq!(counter.get(),1);
}

#[wasm_bindgen_test]
fn invalid_selector_is_reported() {
    let result = query_selector_all("[[");
    assert!(matches!(result,Err(Error::InvalidSelector{..})));
}

#[wasm_bindgen_test]
fn viewport_has_size() {
    let (width,height) = viewport_size().unwrap();
    assert!(width >= 0.0 && height >= 0.0);
}

#[wasm_bindgen_test]
fn wrapped_closure_is_callable_and_replaceable() {
    let calls       = Rc::new(Cell::new(0));
    let mut closure = OptionalFnMutClosure::<web_sys::Event>::default();
    assert!(!closure.is_set());
    let first = closure.wrap({
        let calls = calls.clone();
        move |_:web_sys::Event| calls.set(calls.get() + 1)
    }).clone();
    let event = web_sys::Event::new("scroll").unwrap();
    first.call1(&wasm_bindgen::JsValue::NULL,&event).unwrap();
    assert_eq!(calls.get(),1);

    let second = closure.wrap({
        let calls = calls.clone();
        move |_:web_sys::Event| calls.set(calls.get() + 10)
    }).clone();
    second.call1(&wasm_bindgen::JsValue::NULL,&event).unwrap();
    assert_eq!(calls.get(),11);
    assert!(closure.js_ref().is_some());
    closure.clear();
    assert!(!closure.is_set());
}
