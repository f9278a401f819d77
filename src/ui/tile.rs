use crate::{
    types::{MediaEntry, MediaType},
    utils,
};

pub const WATCH_VIDEO_LABEL: &str = "Watch Video";

/// How the media part of a tile or of the modal is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaNode {
    Image {
        src: String,
        alt: String,
    },
    /// Embedded player for hosted-platform videos.
    Embed {
        src: String,
    },
    /// Outbound link, opened in a new browsing context.
    Link {
        href: String,
        label: String,
        new_context: bool,
    },
}

impl MediaNode {
    pub fn target(&self) -> &str {
        match self {
            MediaNode::Image { src, .. } | MediaNode::Embed { src } => src,
            MediaNode::Link { href, .. } => href,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MediaNode::Image { .. } => "image",
            MediaNode::Embed { .. } => "embedded video",
            MediaNode::Link { .. } => "video link",
        }
    }
}

/// Picks the rendering branch for an entry, `None` for media the gallery
/// skips.
pub fn media_node(entry: &MediaEntry) -> Option<MediaNode> {
    match entry.media_type {
        MediaType::Image => Some(MediaNode::Image {
            src: entry.url.clone(),
            alt: entry.title.clone(),
        }),
        MediaType::Video if utils::is_hosted_video(&entry.url) => Some(MediaNode::Embed {
            src: utils::embed_url(&entry.url),
        }),
        MediaType::Video => Some(MediaNode::Link {
            href: entry.url.clone(),
            label: WATCH_VIDEO_LABEL.to_string(),
            new_context: true,
        }),
        MediaType::Other => None,
    }
}

/// One gallery tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// 1-based position in the gallery, used to open the tile.
    pub position: usize,
    /// Index of the entry in the controller's result set.
    pub entry_index: usize,
    pub date: String,
    pub title: String,
    pub media: MediaNode,
}

/// Builds tiles for entries in their current order, skipping entries without
/// a rendering branch. Positions count only the tiles that are kept.
pub fn build_tiles(entries: &[MediaEntry]) -> Vec<Tile> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(entry_index, entry)| {
            media_node(entry).map(|media| (entry_index, entry, media))
        })
        .enumerate()
        .map(|(i, (entry_index, entry, media))| Tile {
            position: i + 1,
            entry_index,
            date: entry.date.clone(),
            title: entry.title.clone(),
            media,
        })
        .collect()
}
