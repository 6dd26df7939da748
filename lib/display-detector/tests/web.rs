#![cfg(target_arch = "wasm32")]

use dom_display_detector::*;
use dom_display_detector::web::WebEnvironment;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

type Log = Rc<RefCell<Vec<String>>>;

fn append(parent:&Element, style:&str) -> Element {
    let document = detector_system_web::document().unwrap();
    let element  = document.create_element("div").unwrap();
    element.set_attribute("style",style).unwrap();
    parent.append_child(&element).unwrap();
    element
}

fn body() -> Element {
    detector_system_web::document().unwrap().body().unwrap().into()
}

fn recorder(log:&Log, label:&'static str) -> impl FnMut(&Element,bool) {
    let log = log.clone();
    move |_:&Element, initial:bool| log.borrow_mut().push(format!("{label}:{initial}"))
}

#[wasm_bindgen_test]
fn element_in_viewport_is_shown_on_bind() {
    let detector = DisplayDetector::new();
    assert!(detector.is_active());
    let element = append(&body(),"width:50px;height:50px;");
    let log     = Log::default();
    detector.bind(&element,recorder(&log,"show"),recorder(&log,"hide"));
    assert_eq!(*log.borrow(),vec!["show:true".to_string()]);
    assert!(detector.is_bound(&element));
    detector.unbind(&element);
    assert!(!detector.is_bound(&element));
    element.remove();
}

#[wasm_bindgen_test]
fn scrolling_container_hides_element() {
    let detector  = DisplayDetector::new();
    let container = append(&body(),"width:100px;height:100px;overflow:auto;");
    let _spacer   = append(&container,"width:10px;height:300px;");
    let element   = append(&container,"width:10px;height:10px;");
    let log       = Log::default();
    detector.bind(&element,recorder(&log,"show"),recorder(&log,"hide"));
    assert_eq!(*log.borrow(),vec!["hide:true".to_string()]);
    let tracker = detector.tracker().unwrap();
    assert!(tracker.is_scroll_watched(&container));
    assert_eq!(tracker.environment().scroll_listener_count(),1);

    container.set_scroll_top(250);
    detector.detect();
    assert_eq!(*log.borrow(),vec!["hide:true".to_string(),"show:false".to_string()]);

    detector.unbind(&element);
    assert_eq!(detector.tracker().unwrap().environment().scroll_listener_count(),0);
    container.remove();
}

#[wasm_bindgen_test]
fn bind_once_fires_once() {
    let detector = DisplayDetector::new();
    let element  = append(&body(),"width:20px;height:20px;");
    let log      = Log::default();
    let on_show  = { let log = log.clone(); move |_:&Element| log.borrow_mut().push("show".into()) };
    detector.bind_once(&element,on_show,());
    detector.detect();
    assert_eq!(*log.borrow(),vec!["show".to_string()]);
    assert!(!detector.is_bound(&element));
    element.remove();
}

#[wasm_bindgen_test]
fn environment_reads_computed_style() {
    let env       = WebEnvironment::new(logger::Logger::new("test"),false);
    let container = append(&body(),"overflow-y:scroll;position:relative;");
    let style     = env.computed_style(&container);
    assert!(style.clips_overflow());
    assert_eq!(style.position,Position::Relative);
    assert!(env.query_all("[[").is_empty());
    container.remove();
}
