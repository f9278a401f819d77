use crate::{
    types::MediaEntry,
    ui::tile::{MediaNode, media_node},
};

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    CloseControl,
    /// The overlay around the content panel.
    Backdrop,
    /// The content panel itself.
    Content,
}

/// Detail content for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub media: Option<MediaNode>,
    pub title: String,
    pub date: String,
    pub explanation: String,
    pub copyright: Option<String>,
    pub hdurl: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl ModalView {
    pub fn from_entry(entry: &MediaEntry) -> Self {
        Self {
            media: media_node(entry),
            title: entry.title.clone(),
            date: entry.date.clone(),
            explanation: entry.explanation.clone(),
            copyright: entry.copyright.as_ref().map(|c| c.trim().to_string()),
            hdurl: entry.hdurl.clone(),
            thumbnail_url: entry.thumbnail_url.clone(),
        }
    }
}

/// The single modal overlay. Content survives a close so that the last view
/// is still inspectable, but only a visible modal is presented.
#[derive(Debug, Default)]
pub struct Modal {
    content: Option<ModalView>,
    visible: bool,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content with `entry` and shows the modal.
    pub fn show(&mut self, entry: &MediaEntry) -> &ModalView {
        self.visible = true;
        self.content.insert(ModalView::from_entry(entry))
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Handles a click and returns whether the modal is still visible.
    pub fn click(&mut self, target: ModalTarget) -> bool {
        if !self.visible {
            return false;
        }

        match target {
            ModalTarget::CloseControl | ModalTarget::Backdrop => self.close(),
            ModalTarget::Content => {}
        }

        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The content currently on screen.
    pub fn view(&self) -> Option<&ModalView> {
        if self.visible {
            self.content.as_ref()
        } else {
            None
        }
    }
}
