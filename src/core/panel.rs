//! Info panel operations over an abstract host document.

use crate::core::constants::{
    BACKDROP_ID, PANEL_DESCRIPTION_ID, PANEL_ID, PANEL_TITLE_ID, VISIBLE_CLASS,
};

/// Element ids the panel expects in the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelIds {
    pub panel: String,
    pub title: String,
    pub description: String,
    /// Optional; skipped when the page has no such element.
    pub backdrop: Option<String>,
}

impl Default for PanelIds {
    fn default() -> Self {
        Self {
            panel: PANEL_ID.to_owned(),
            title: PANEL_TITLE_ID.to_owned(),
            description: PANEL_DESCRIPTION_ID.to_owned(),
            backdrop: Some(BACKDROP_ID.to_owned()),
        }
    }
}

/// The handful of document operations the panel needs. Each returns `false`
/// when no element with `id` exists.
pub trait PanelHost {
    fn set_text(&mut self, id: &str, text: &str) -> bool;
    fn add_class(&mut self, id: &str, class: &str) -> bool;
    fn remove_class(&mut self, id: &str, class: &str) -> bool;
}

pub fn show<H: PanelHost + ?Sized>(
    host: &mut H,
    ids: &PanelIds,
    title: &str,
    description: &str,
) -> anyhow::Result<()> {
    if !host.set_text(&ids.title, title) {
        anyhow::bail!("missing #{}", ids.title);
    }
    if !host.set_text(&ids.description, description) {
        anyhow::bail!("missing #{}", ids.description);
    }
    if !host.add_class(&ids.panel, VISIBLE_CLASS) {
        anyhow::bail!("missing #{}", ids.panel);
    }
    if let Some(backdrop) = &ids.backdrop {
        host.add_class(backdrop, VISIBLE_CLASS);
    }
    Ok(())
}

/// Hide the panel and backdrop. Missing elements are skipped; calling it
/// again is a no-op.
pub fn close<H: PanelHost + ?Sized>(host: &mut H, ids: &PanelIds) {
    host.remove_class(&ids.panel, VISIBLE_CLASS);
    if let Some(backdrop) = &ids.backdrop {
        host.remove_class(backdrop, VISIBLE_CLASS);
    }
}
