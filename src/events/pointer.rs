use crate::core::Viewer;
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Click on the canvas: pick, highlight and open the info panel. A miss
/// leaves everything as it was.
pub fn wire_click(canvas: &web::HtmlCanvasElement, viewer: Rc<RefCell<Viewer>>) {
    let canvas_for_click = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut v = viewer.borrow_mut();
        let (width, height) = v.viewport();
        let (sx, sy) = dom::pointer_viewport_px(&ev, &canvas_for_click, width, height);
        let Some(index) = v.click(sx, sy) else {
            return;
        };
        if let Some(document) = dom::window_document() {
            let artifact = &v.scene.artifacts[index];
            if let Err(e) = overlay::show_artifact(&document, &v.config.panel, artifact) {
                log::error!("[panel] {:?}", e);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
