use crate::core::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_key(
    document: &web::Document,
    event: &str,
    viewer: Rc<RefCell<Viewer>>,
    down: bool,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        log::debug!("[keys] {} {}", key, if down { "down" } else { "up" });
        let mut v = viewer.borrow_mut();
        if down {
            v.key_down(&key);
        } else {
            v.key_up(&key);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Track held keys for camera movement.
pub fn wire_keyboard(document: &web::Document, viewer: Rc<RefCell<Viewer>>) {
    wire_key(document, "keydown", viewer.clone(), true);
    wire_key(document, "keyup", viewer, false);
}
