// Host-side tests for the info panel against an in-memory document.

use artifact_viewer::core::constants::*;
use artifact_viewer::core::panel::{self, PanelHost, PanelIds};
use std::collections::{BTreeSet, HashMap};

#[derive(Default)]
struct FakeElement {
    text: String,
    classes: BTreeSet<String>,
}

#[derive(Default)]
struct FakeDocument {
    elements: HashMap<String, FakeElement>,
}

impl FakeDocument {
    fn with_ids(ids: &[&str]) -> Self {
        let mut doc = Self::default();
        for id in ids {
            doc.elements.insert(id.to_string(), FakeElement::default());
        }
        doc
    }

    fn full() -> Self {
        Self::with_ids(&[PANEL_ID, PANEL_TITLE_ID, PANEL_DESCRIPTION_ID, BACKDROP_ID])
    }

    fn text(&self, id: &str) -> &str {
        &self.elements[id].text
    }

    fn visible(&self, id: &str) -> bool {
        self.elements[id].classes.contains(VISIBLE_CLASS)
    }
}

impl PanelHost for FakeDocument {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.elements
            .get_mut(id)
            .map(|el| el.text = text.to_owned())
            .is_some()
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.elements
            .get_mut(id)
            .map(|el| el.classes.insert(class.to_owned()))
            .is_some()
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.elements
            .get_mut(id)
            .map(|el| el.classes.remove(class))
            .is_some()
    }
}

#[test]
fn show_fills_text_and_reveals_panel_and_backdrop() {
    let mut doc = FakeDocument::full();
    let ids = PanelIds::default();
    panel::show(&mut doc, &ids, "Urban Model", "A miniature city.").unwrap();
    assert_eq!(doc.text(PANEL_TITLE_ID), "Urban Model");
    assert_eq!(doc.text(PANEL_DESCRIPTION_ID), "A miniature city.");
    assert!(doc.visible(PANEL_ID));
    assert!(doc.visible(BACKDROP_ID));
}

#[test]
fn showing_again_replaces_the_text() {
    let mut doc = FakeDocument::full();
    let ids = PanelIds::default();
    panel::show(&mut doc, &ids, "Ancient Pottery", "first").unwrap();
    panel::show(&mut doc, &ids, "Stone Sculpture", "second").unwrap();
    assert_eq!(doc.text(PANEL_TITLE_ID), "Stone Sculpture");
    assert_eq!(doc.text(PANEL_DESCRIPTION_ID), "second");
    assert_eq!(doc.elements[PANEL_ID].classes.len(), 1);
}

#[test]
fn close_hides_both_and_is_idempotent() {
    let mut doc = FakeDocument::full();
    let ids = PanelIds::default();
    panel::show(&mut doc, &ids, "t", "d").unwrap();
    panel::close(&mut doc, &ids);
    assert!(!doc.visible(PANEL_ID));
    assert!(!doc.visible(BACKDROP_ID));
    panel::close(&mut doc, &ids);
    assert!(!doc.visible(PANEL_ID));
    // text is left in place for the next show
    assert_eq!(doc.text(PANEL_TITLE_ID), "t");
}

#[test]
fn close_before_any_show_is_harmless() {
    let mut doc = FakeDocument::full();
    panel::close(&mut doc, &PanelIds::default());
    assert!(!doc.visible(PANEL_ID));
}

#[test]
fn missing_backdrop_is_tolerated() {
    let mut doc = FakeDocument::with_ids(&[PANEL_ID, PANEL_TITLE_ID, PANEL_DESCRIPTION_ID]);
    let ids = PanelIds::default();
    panel::show(&mut doc, &ids, "t", "d").unwrap();
    assert!(doc.visible(PANEL_ID));
    panel::close(&mut doc, &ids);
    assert!(!doc.visible(PANEL_ID));

    let no_backdrop = PanelIds {
        backdrop: None,
        ..PanelIds::default()
    };
    panel::show(&mut doc, &no_backdrop, "t", "d").unwrap();
    assert!(doc.visible(PANEL_ID));
}

#[test]
fn missing_title_element_is_an_error() {
    let mut doc = FakeDocument::with_ids(&[PANEL_ID, PANEL_DESCRIPTION_ID]);
    let err = panel::show(&mut doc, &PanelIds::default(), "t", "d").unwrap_err();
    assert!(err.to_string().contains(PANEL_TITLE_ID));
    assert!(!doc.visible(PANEL_ID));
}

#[test]
fn missing_panel_element_is_an_error() {
    let mut doc = FakeDocument::with_ids(&[PANEL_TITLE_ID, PANEL_DESCRIPTION_ID]);
    let err = panel::show(&mut doc, &PanelIds::default(), "t", "d").unwrap_err();
    assert!(err.to_string().contains(PANEL_ID));
}

#[test]
fn close_uses_the_configured_ids() {
    let mut doc = FakeDocument::with_ids(&["card", "card-title", "card-body", PANEL_ID]);
    let ids = PanelIds {
        panel: "card".into(),
        title: "card-title".into(),
        description: "card-body".into(),
        backdrop: None,
    };
    panel::show(&mut doc, &ids, "t", "d").unwrap();
    doc.add_class(PANEL_ID, VISIBLE_CLASS);
    panel::close(&mut doc, &ids);
    assert!(!doc.visible("card"));
    // an element that merely has the default id is left alone
    assert!(doc.visible(PANEL_ID));
}
