use crate::constants::{PANEL_ACTIVE_CLASS, PANEL_CONTENT_SELECTOR, PANEL_SELECTOR};
use crate::dom;
use portfolio_core::{ContentKind, ContentRecord, PanelPresenter};
use web_sys as web;

pub mod layout;

/// Info panel backed by the page's `.info-panel` element.
pub struct DomPanel {
    panel: web::HtmlElement,
    content: web::HtmlElement,
}

impl DomPanel {
    /// Resolve the panel elements. Fails if the page lacks either one.
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            panel: dom::query_html(document, PANEL_SELECTOR)?,
            content: dom::query_html(document, PANEL_CONTENT_SELECTOR)?,
        })
    }
}

impl PanelPresenter for DomPanel {
    fn show(&mut self, kind: ContentKind, record: &ContentRecord) {
        self.content.set_inner_html(&layout::record_html(record));
        self.content
            .set_attribute("data-kind", kind.as_str())
            .ok();
        _ = self.panel.class_list().add_1(PANEL_ACTIVE_CLASS);
        _ = self.panel.style().set_property("pointer-events", "all");
    }

    fn hide(&mut self) {
        _ = self.panel.class_list().remove_1(PANEL_ACTIVE_CLASS);
        _ = self.panel.style().set_property("pointer-events", "none");
    }
}
