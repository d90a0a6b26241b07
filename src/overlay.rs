use crate::core::panel::{self, PanelHost, PanelIds};
use crate::core::scene::Artifact;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`PanelHost`] backed by the live document.
pub struct DomPanel {
    document: web::Document,
}

impl DomPanel {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl PanelHost for DomPanel {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(el) => {
                match el.dyn_ref::<web::HtmlElement>() {
                    Some(html) => html.set_inner_text(text),
                    None => el.set_text_content(Some(text)),
                }
                true
            }
            None => false,
        }
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .map(|el| el.class_list().add_1(class).is_ok())
            .unwrap_or(false)
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.document
            .get_element_by_id(id)
            .map(|el| el.class_list().remove_1(class).is_ok())
            .unwrap_or(false)
    }
}

pub fn show_artifact(
    document: &web::Document,
    ids: &PanelIds,
    artifact: &Artifact,
) -> anyhow::Result<()> {
    let mut host = DomPanel::new(document.clone());
    panel::show(&mut host, ids, &artifact.title, &artifact.description)
}

pub fn close(document: &web::Document, ids: &PanelIds) {
    panel::close(&mut DomPanel::new(document.clone()), ids);
}

/// Put `closePanel` on `window` so markup (`onclick="closePanel()"`) can
/// reach it.
pub fn install_close_panel(window: &web::Window, ids: PanelIds) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(document) = crate::dom::window_document() {
            close(&document, &ids);
        }
    }) as Box<dyn FnMut()>);
    js_sys::Reflect::set(window, &JsValue::from_str("closePanel"), closure.as_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}
