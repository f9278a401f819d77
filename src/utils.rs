use std::cmp::Reverse;

use chrono::{Duration, NaiveDate, Utc};

use crate::types::MediaEntry;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Domain of the video platform whose links can be embedded.
pub const HOSTED_VIDEO_DOMAIN: &str = "youtube.com";
pub const WATCH_PATH_MARKER: &str = "watch?v=";
pub const EMBED_PATH_MARKER: &str = "embed/";

/// First day of the APOD archive.
pub fn archive_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or(NaiveDate::MIN)
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn clamp_date(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    if date < min {
        min
    } else if date > max {
        max
    } else {
        date
    }
}

/// The trailing window ending at `today`, `days` long.
pub fn trailing_window(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(days), today)
}

pub fn is_hosted_video(url: &str) -> bool {
    url.contains(HOSTED_VIDEO_DOMAIN)
}

/// Turns a `watch?v=` link into its `embed/` form. Only the first marker is
/// rewritten.
pub fn embed_url(url: &str) -> String {
    url.replacen(WATCH_PATH_MARKER, EMBED_PATH_MARKER, 1)
}

/// Newest first. The sort is stable, entries sharing a date keep their order
/// and entries with an unparseable date go last.
pub fn sort_entries_by_date(entries: &mut Vec<MediaEntry>) {
    entries.sort_by_key(|entry| Reverse(parse_date(&entry.date)));
}

/// What a line typed at the interactive prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Open(usize),
    CloseControl,
    Backdrop,
    Content,
    Launch,
    Quit,
    Unknown,
}

/// Maps prompt input to an action.
///
/// While the modal is open an empty line is a click on the backdrop; with the
/// modal closed it does nothing.
pub fn parse_prompt_input(line: &str, modal_open: bool) -> PromptAction {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" | "exit" => PromptAction::Quit,
        "" if modal_open => PromptAction::Backdrop,
        "x" | "close" if modal_open => PromptAction::CloseControl,
        "c" | "content" if modal_open => PromptAction::Content,
        "w" | "watch" | "open" if modal_open => PromptAction::Launch,
        other => match other.parse::<usize>() {
            Ok(position) if position > 0 => PromptAction::Open(position),
            _ => PromptAction::Unknown,
        },
    }
}
