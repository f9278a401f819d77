use std::io::Write;

use colored::Colorize;
use tabled::Table;

use crate::{
    info,
    types::GalleryTableRow,
    ui::{GalleryView, MediaNode, ModalView, Tile},
    warning,
};

pub fn gallery_view(view: &GalleryView) {
    match view {
        GalleryView::Empty => {}
        GalleryView::Loading => info!("Loading..."),
        GalleryView::Message(notice) if notice.is_error() => warning!("{}", notice),
        GalleryView::Message(notice) => info!("{}", notice),
        GalleryView::Tiles(tiles) => println!("{}", gallery_table(tiles)),
    }
}

pub fn gallery_table(tiles: &[Tile]) -> Table {
    let rows: Vec<GalleryTableRow> = tiles
        .iter()
        .map(|tile| GalleryTableRow {
            position: tile.position,
            date: tile.date.clone(),
            title: tile.title.clone(),
            media: tile.media.kind().to_string(),
        })
        .collect();

    Table::new(rows)
}

pub fn modal(view: &ModalView) {
    println!("{}", "[x] close".dimmed());

    if let Some(media) = &view.media {
        println!("{}", media_line(media));
    }

    println!("\n{}", view.title.bold());
    println!("{} {}", "Date:".bold(), view.date);
    if let Some(copyright) = &view.copyright {
        println!("{} {}", "Copyright:".bold(), copyright);
    }
    if let Some(hdurl) = &view.hdurl {
        println!("{} {}", "HD:".bold(), hdurl);
    }
    if let Some(thumbnail_url) = &view.thumbnail_url {
        println!("{} {}", "Thumbnail:".bold(), thumbnail_url);
    }
    println!("\n{}\n", view.explanation);
}

fn media_line(media: &MediaNode) -> String {
    match media {
        MediaNode::Image { src, .. } => format!("{} {}", "Image:".bold(), src),
        MediaNode::Embed { src } => format!("{} {}", "Player:".bold(), src),
        MediaNode::Link { href, label, .. } => format!("{} {}", label.underline(), href),
    }
}

pub fn prompt(modal_open: bool) -> std::io::Result<()> {
    let hint = if modal_open {
        "[w] open media, [x] close, [enter] click outside, [q] quit"
    } else {
        "tile number to open, [q] quit"
    };
    print!("{} {} ", hint.dimmed(), ">".blue().bold());
    std::io::stdout().flush()
}
