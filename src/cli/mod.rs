//! # CLI Module
//!
//! This module provides the command-line interface layer for apodcli. It turns
//! the owned gallery state from [`crate::ui`] into terminal output and feeds
//! user input back into it.
//!
//! ## Commands
//!
//! - [`gallery`] - Validates a date range, fetches it from APOD, prints the
//!   tiles and optionally opens the detail view, once or interactively
//! - [`info`] - Prints the default date window and the archive bounds
//! - [`fact`] - Prints a random space fact
//!
//! ## Layering
//!
//! ```text
//! CLI Layer (prompt, tables, spinner)
//!     ↓
//! UI Layer (controller, tiles, modal, picker)
//!     ↓
//! API Layer (APOD client)
//! ```
//!
//! ## Error Presentation
//!
//! Validation and fetch failures never abort the program. They show up as the
//! same inline notices the gallery uses for empty results; only a client that
//! cannot be constructed at all terminates with `error!`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! apodcli gallery                                     # last nine days
//! apodcli gallery --start-date 2020-01-01 --end-date 2020-01-03 --open 1
//! apodcli gallery --interactive                       # browse tiles
//! apodcli info --archive
//! ```

mod fact;
mod gallery;
mod info;
mod render;

pub use fact::fact;
pub use gallery::gallery;
pub use info::info;
