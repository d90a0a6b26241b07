pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_click;

use crate::core::Viewer;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize: canvas backing store and camera aspect follow the window.
/// The GPU surface catches up on the next frame.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, viewer: Rc<RefCell<Viewer>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let (width, height) = dom::window_size(&window);
            dom::size_canvas(&canvas, width, height);
            viewer.borrow_mut().resize(width, height);
            log::debug!("[resize] {}x{}", width, height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
