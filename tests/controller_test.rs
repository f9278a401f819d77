use std::{cell::Cell, future::Future};

use apodcli::errors::{GalleryError, Notice};
use apodcli::nasa::{EntrySource, decode_entries};
use apodcli::types::{DateRange, MediaEntry, MediaType};
use apodcli::ui::*;

// Source that counts calls and answers with a fixed result
struct FakeSource {
    calls: Cell<usize>,
    result: Result<Vec<MediaEntry>, GalleryError>,
}

impl FakeSource {
    fn new(result: Result<Vec<MediaEntry>, GalleryError>) -> Self {
        Self {
            calls: Cell::new(0),
            result,
        }
    }
}

impl EntrySource for FakeSource {
    fn fetch(
        &self,
        _range: &DateRange,
    ) -> impl Future<Output = Result<Vec<MediaEntry>, GalleryError>> {
        self.calls.set(self.calls.get() + 1);
        let result = self.result.clone();
        async move { result }
    }
}

fn create_test_entry(date: &str, title: &str, media_type: MediaType, url: &str) -> MediaEntry {
    MediaEntry {
        date: date.to_string(),
        title: title.to_string(),
        explanation: format!("Explanation of {}", title),
        media_type,
        url: url.to_string(),
        copyright: None,
        hdurl: None,
        thumbnail_url: None,
    }
}

fn sample_entries() -> Vec<MediaEntry> {
    vec![
        create_test_entry(
            "2020-01-01",
            "Orion",
            MediaType::Image,
            "https://apod.nasa.gov/a.jpg",
        ),
        create_test_entry(
            "2020-01-03",
            "Launch",
            MediaType::Video,
            "https://www.youtube.com/watch?v=xyz",
        ),
        create_test_entry(
            "2020-01-02",
            "Aurora",
            MediaType::Video,
            "https://vimeo.com/1234",
        ),
    ]
}

#[test]
fn test_check_range() {
    let range = check_range("2020-01-01", "2020-01-03").unwrap();
    assert_eq!(range.start.to_string(), "2020-01-01");
    assert_eq!(range.end.to_string(), "2020-01-03");

    // A single day is a valid range
    assert!(check_range("2020-01-01", "2020-01-01").is_ok());
}

#[test]
fn test_validate_range_rejects_invalid_dates() {
    let mut controller = GalleryController::new();

    for (start, end) in [("", "2020-01-01"), ("2020-01-01", "soon"), ("abc", "xyz")] {
        let err = controller.validate_range(start, end).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidDate(_)));
        assert_eq!(
            controller.view(),
            &GalleryView::Message(Notice::InvalidDate)
        );
        assert_eq!(controller.phase(), Phase::Idle);
    }
}

#[test]
fn test_validate_range_rejects_reversed_range() {
    let mut controller = GalleryController::new();

    let err = controller
        .validate_range("2020-01-05", "2020-01-01")
        .unwrap_err();
    assert!(matches!(err, GalleryError::RangeOrderError { .. }));
    assert_eq!(controller.view(), &GalleryView::Message(Notice::RangeOrder));
}

#[tokio::test]
async fn test_search_skips_fetch_on_invalid_input() {
    let source = FakeSource::new(Ok(sample_entries()));
    let mut controller = GalleryController::new();

    assert!(!controller.search(&source, "2020-01-05", "2020-01-01").await);
    assert!(!controller.search(&source, "not a date", "2020-01-01").await);
    assert_eq!(source.calls.get(), 0);
}

#[tokio::test]
async fn test_search_renders_newest_first() {
    let source = FakeSource::new(Ok(sample_entries()));
    let mut controller = GalleryController::new();

    assert!(controller.search(&source, "2020-01-01", "2020-01-03").await);
    assert_eq!(source.calls.get(), 1);
    assert_eq!(controller.phase(), Phase::Rendered);

    let dates: Vec<&str> = controller.tiles().iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, vec!["2020-01-03", "2020-01-02", "2020-01-01"]);

    let positions: Vec<usize> = controller.tiles().iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[test]
fn test_render_gallery_media_branches() {
    let mut controller = GalleryController::new();
    controller.render_gallery(sample_entries());

    let tiles = controller.tiles();
    assert_eq!(
        tiles[0].media,
        MediaNode::Embed {
            src: "https://www.youtube.com/embed/xyz".to_string()
        }
    );
    assert_eq!(
        tiles[1].media,
        MediaNode::Link {
            href: "https://vimeo.com/1234".to_string(),
            label: WATCH_VIDEO_LABEL.to_string(),
            new_context: true,
        }
    );
    assert_eq!(
        tiles[2].media,
        MediaNode::Image {
            src: "https://apod.nasa.gov/a.jpg".to_string(),
            alt: "Orion".to_string(),
        }
    );
}

#[test]
fn test_render_gallery_skips_unknown_media() {
    let mut controller = GalleryController::new();
    let mut entries = sample_entries();
    entries.push(create_test_entry(
        "2020-01-04",
        "Radio",
        MediaType::Other,
        "https://apod.nasa.gov/a.mp3",
    ));

    controller.render_gallery(entries);

    assert_eq!(controller.tiles().len(), 3);
    assert!(controller.tiles().iter().all(|t| t.title != "Radio"));
    // Positions only count shown tiles
    assert_eq!(controller.tiles()[0].position, 1);
    assert_eq!(controller.tiles()[0].date, "2020-01-03");
}

#[test]
fn test_render_gallery_with_only_unknown_media_shows_nothing_found() {
    let mut controller = GalleryController::new();
    controller.render_gallery(vec![create_test_entry(
        "2020-01-04",
        "Radio",
        MediaType::Other,
        "https://apod.nasa.gov/a.mp3",
    )]);

    assert!(controller.tiles().is_empty());
    assert_eq!(
        controller.view(),
        &GalleryView::Message(Notice::NothingToShow)
    );
}

#[test]
fn test_unknown_media_type_decodes_as_other() {
    let body = r#"[{"date":"2020-01-04","title":"Radio","explanation":"x","media_type":"audio","url":"a.mp3"}]"#;
    let entries = decode_entries(body).unwrap();
    assert_eq!(entries[0].media_type, MediaType::Other);

    let mut controller = GalleryController::new();
    controller.render_gallery(entries);
    assert!(controller.tiles().is_empty());
}

#[tokio::test]
async fn test_error_object_shows_no_images_found() {
    let result = decode_entries(r#"{"error":{"code":"OVER_RATE_LIMIT","message":"slow down"}}"#);
    let source = FakeSource::new(result);
    let mut controller = GalleryController::new();

    assert!(!controller.search(&source, "2020-01-01", "2020-01-03").await);
    assert_eq!(controller.view(), &GalleryView::Message(Notice::NoResults));
    assert_eq!(controller.phase(), Phase::Idle);
}

#[tokio::test]
async fn test_network_error_shows_retry_message() {
    let source = FakeSource::new(Err(GalleryError::NetworkError(
        "connection refused".to_string(),
    )));
    let mut controller = GalleryController::new();

    assert!(!controller.search(&source, "2020-01-01", "2020-01-03").await);
    assert_eq!(controller.view(), &GalleryView::Message(Notice::LoadFailed));
}

#[test]
fn test_sparse_unknown_entry_does_not_hide_the_rest() {
    let body = r#"[
        {"date":"2020-01-02","title":"Aurora","explanation":"Lights","media_type":"image","url":"a.jpg"},
        {"date":"2020-01-03","media_type":"other","url":null}
    ]"#;

    let mut controller = GalleryController::new();
    controller.render_gallery(decode_entries(body).unwrap());

    assert_eq!(controller.tiles().len(), 1);
    assert_eq!(controller.tiles()[0].title, "Aurora");
    assert_eq!(controller.tiles()[0].position, 1);
}

#[test]
fn test_stale_fetch_is_discarded() {
    let mut controller = GalleryController::new();

    let first = controller.begin_fetch();
    let second = controller.begin_fetch();
    assert!(first < second);
    assert_eq!(controller.view(), &GalleryView::Loading);

    // The later request resolves first
    assert!(controller.complete_fetch(second, Ok(sample_entries())));
    assert_eq!(controller.tiles().len(), 3);

    // The earlier one must not overwrite it
    assert!(!controller.complete_fetch(first, Ok(Vec::new())));
    assert_eq!(controller.tiles().len(), 3);
    assert!(!controller.complete_fetch(
        first,
        Err(GalleryError::NetworkError("late".to_string()))
    ));
    assert_eq!(controller.phase(), Phase::Rendered);
}

#[test]
fn test_modal_backdrop_closes_content_does_not() {
    let mut controller = GalleryController::new();
    controller.render_gallery(sample_entries());

    let view = controller.open_tile(3).unwrap();
    assert_eq!(view.title, "Orion");
    assert_eq!(view.date, "2020-01-01");
    assert_eq!(view.explanation, "Explanation of Orion");

    // Clicking inside the content panel keeps it open
    assert!(controller.click_modal(ModalTarget::Content));
    assert!(controller.modal().is_visible());

    // Clicking the backdrop closes it
    assert!(!controller.click_modal(ModalTarget::Backdrop));
    assert!(!controller.modal().is_visible());
    assert!(controller.modal().view().is_none());
}

#[test]
fn test_modal_close_control() {
    let mut controller = GalleryController::new();
    controller.render_gallery(sample_entries());

    controller.open_tile(1).unwrap();
    assert!(!controller.click_modal(ModalTarget::CloseControl));
    assert!(!controller.modal().is_visible());
}

#[test]
fn test_opening_another_entry_replaces_modal_content() {
    let mut controller = GalleryController::new();
    controller.render_gallery(sample_entries());

    controller.open_tile(1).unwrap();
    let view = controller.open_tile(2).unwrap();
    assert_eq!(view.title, "Aurora");
    assert_eq!(
        controller.modal().view().map(|v| v.title.as_str()),
        Some("Aurora")
    );
}

#[test]
fn test_open_missing_tile() {
    let mut controller = GalleryController::new();
    assert!(controller.open_tile(1).is_none());

    controller.render_gallery(sample_entries());
    assert!(controller.open_tile(0).is_none());
    assert!(controller.open_tile(4).is_none());
    assert!(!controller.modal().is_visible());
}

#[test]
fn test_modal_carries_extra_links() {
    let mut controller = GalleryController::new();
    let mut entry = create_test_entry(
        "2021-07-04",
        "Launch",
        MediaType::Video,
        "https://www.youtube.com/watch?v=abc",
    );
    entry.thumbnail_url = Some("https://img.youtube.com/vi/abc/0.jpg".to_string());
    entry.hdurl = Some("https://apod.nasa.gov/hd.jpg".to_string());
    entry.copyright = Some("\n Jane Doe ".to_string());

    let view = controller.show_modal(&entry);
    assert_eq!(
        view.thumbnail_url.as_deref(),
        Some("https://img.youtube.com/vi/abc/0.jpg")
    );
    assert_eq!(view.hdurl.as_deref(), Some("https://apod.nasa.gov/hd.jpg"));
    assert_eq!(view.copyright.as_deref(), Some("Jane Doe"));

    // Entries without them leave the fields empty
    let plain = create_test_entry("2021-07-05", "Moon", MediaType::Image, "m.jpg");
    assert_eq!(controller.show_modal(&plain).thumbnail_url, None);
}

#[test]
fn test_show_and_close_modal_directly() {
    let mut controller = GalleryController::new();
    let entry = create_test_entry("2021-07-04", "Nebula", MediaType::Image, "n.jpg");

    let view = controller.show_modal(&entry);
    assert_eq!(
        view.media,
        Some(MediaNode::Image {
            src: "n.jpg".to_string(),
            alt: "Nebula".to_string()
        })
    );
    assert!(controller.modal().is_visible());

    controller.close_modal();
    assert!(!controller.modal().is_visible());
}
