//! # UI Module
//!
//! The gallery's user interface as plain owned state. Nothing in here prints:
//! the controller produces node descriptions ([`Tile`], [`MediaNode`],
//! [`ModalView`]) and the CLI layer decides how to draw them.
//!
//! - [`controller`] - validation, fetch sequencing, gallery content and modal
//! - [`tile`] - media branch selection and tile construction
//! - [`modal`] - the single detail overlay and its click handling
//! - [`picker`] - default date window and archive bounds

pub mod controller;
pub mod modal;
pub mod picker;
pub mod tile;

pub use controller::{GalleryController, GalleryView, Phase, RequestToken, check_range};
pub use modal::{Modal, ModalTarget, ModalView};
pub use picker::{DEFAULT_WINDOW_DAYS, DateRangePicker};
pub use tile::{MediaNode, Tile, WATCH_VIDEO_LABEL, build_tiles, media_node};
