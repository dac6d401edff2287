//! Info panel seam. Front-ends decide how a record is shown.

use crate::content::{ContentKind, ContentRecord};

pub trait PanelPresenter {
    /// Present `record` (the content for `kind`). Replaces anything shown.
    fn show(&mut self, kind: ContentKind, record: &ContentRecord);
    fn hide(&mut self);
}

/// Presenter that writes panel content to the log. Used by the native
/// viewer and handy in tests.
#[derive(Debug, Default)]
pub struct LogPresenter {
    visible: Option<ContentKind>,
}

impl LogPresenter {
    pub fn visible(&self) -> Option<ContentKind> {
        self.visible
    }
}

impl PanelPresenter for LogPresenter {
    fn show(&mut self, kind: ContentKind, record: &ContentRecord) {
        self.visible = Some(kind);
        log::info!("[panel] {}", record.title);
        for item in record.items {
            match item.subtitle {
                Some(sub) => log::info!("[panel]   {} ({})", item.title, sub),
                None => log::info!("[panel]   {}", item.title),
            }
            log::info!("[panel]     {}", item.description);
        }
    }

    fn hide(&mut self) {
        if self.visible.take().is_some() {
            log::info!("[panel] closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_visibility() {
        let mut p = LogPresenter::default();
        p.show(ContentKind::Skills, ContentKind::Skills.record());
        assert_eq!(p.visible(), Some(ContentKind::Skills));
        p.hide();
        assert_eq!(p.visible(), None);
    }
}
