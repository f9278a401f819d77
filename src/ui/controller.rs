use crate::{
    errors::{GalleryError, Notice},
    nasa::EntrySource,
    types::{DateRange, MediaEntry},
    ui::{
        modal::{Modal, ModalTarget, ModalView},
        tile::{Tile, build_tiles},
    },
    utils,
};

/// Identifies one issued fetch. Tokens only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Fetching(RequestToken),
    Rendered,
}

/// What currently occupies the gallery area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Empty,
    Loading,
    Message(Notice),
    Tiles(Vec<Tile>),
}

/// Owns the result set, the gallery content and the modal.
///
/// Validation, fetching and rendering move through [`Phase`]; the modal is
/// independent of the phase and is never touched by a fetch.
#[derive(Debug)]
pub struct GalleryController {
    phase: Phase,
    view: GalleryView,
    entries: Vec<MediaEntry>,
    last_token: u64,
    modal: Modal,
}

impl Default for GalleryController {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            view: GalleryView::Empty,
            entries: Vec::new(),
            last_token: 0,
            modal: Modal::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    /// The current result set, newest first once rendered.
    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn tiles(&self) -> &[Tile] {
        match &self.view {
            GalleryView::Tiles(tiles) => tiles,
            _ => &[],
        }
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Checks both inputs. On failure the notice replaces the gallery content.
    pub fn validate_range(&mut self, start: &str, end: &str) -> Result<DateRange, GalleryError> {
        self.phase = Phase::Validating;

        match check_range(start, end) {
            Ok(range) => Ok(range),
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Issues a new request token and shows the loading state.
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.phase = Phase::Fetching(token);
        self.view = GalleryView::Loading;
        token
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.last_token
    }

    /// Applies the outcome of the fetch identified by `token`.
    ///
    /// Results of any fetch other than the latest issued one are dropped and
    /// `false` is returned.
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        result: Result<Vec<MediaEntry>, GalleryError>,
    ) -> bool {
        if !self.is_latest(token) {
            return false;
        }

        match result {
            Ok(entries) => self.render_gallery(entries),
            Err(err) => self.fail(&err),
        }

        true
    }

    /// Replaces the result set and rebuilds the tiles, newest first.
    pub fn render_gallery(&mut self, mut entries: Vec<MediaEntry>) {
        utils::sort_entries_by_date(&mut entries);
        let tiles = build_tiles(&entries);

        self.entries = entries;
        self.phase = Phase::Rendered;
        self.view = if tiles.is_empty() {
            GalleryView::Message(Notice::NothingToShow)
        } else {
            GalleryView::Tiles(tiles)
        };
    }

    /// Validates, fetches and renders one date range.
    ///
    /// Returns whether the gallery was rendered from the response. Invalid
    /// input never reaches `source`.
    pub async fn search<S: EntrySource>(&mut self, source: &S, start: &str, end: &str) -> bool {
        let range = match self.validate_range(start, end) {
            Ok(range) => range,
            Err(_) => return false,
        };

        let token = self.begin_fetch();
        let result = source.fetch(&range).await;
        let ok = result.is_ok();
        self.complete_fetch(token, result) && ok
    }

    pub fn show_modal(&mut self, entry: &MediaEntry) -> &ModalView {
        self.modal.show(entry)
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Opens the modal for the tile at `position`.
    pub fn open_tile(&mut self, position: usize) -> Option<&ModalView> {
        let entry_index = self
            .tiles()
            .iter()
            .find(|tile| tile.position == position)
            .map(|tile| tile.entry_index)?;
        let entry = self.entries.get(entry_index)?.clone();
        Some(self.modal.show(&entry))
    }

    /// Returns whether the modal is still visible after the click.
    pub fn click_modal(&mut self, target: ModalTarget) -> bool {
        self.modal.click(target)
    }

    fn fail(&mut self, err: &GalleryError) {
        self.phase = Phase::Idle;
        self.view = GalleryView::Message(Notice::from(err));
    }
}

/// Parses both inputs and checks their order. Equal dates are allowed.
pub fn check_range(start: &str, end: &str) -> Result<DateRange, GalleryError> {
    let start_date =
        utils::parse_date(start).ok_or_else(|| GalleryError::InvalidDate(start.to_string()))?;
    let end_date =
        utils::parse_date(end).ok_or_else(|| GalleryError::InvalidDate(end.to_string()))?;

    if start_date > end_date {
        return Err(GalleryError::RangeOrderError {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(DateRange {
        start: start_date,
        end: end_date,
    })
}
