//! # Spotfinder - saved-places manager
//!
//! A location book backed by a single-table SQLite database, with a
//! pluggable map view for displaying the selected place.
//!
//! Spotfinder provides:
//! - A `Location` record type (id, address, latitude, longitude)
//! - SQLite-backed storage with seed data, substring search, and CRUD
//! - A `MapView` trait for camera and marker control
//! - A list adapter that routes row selection to a callback
//! - An application shell that validates input and orchestrates the above

pub mod app;
pub mod config;
pub mod list;
pub mod location;
pub mod map;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use app::App;
pub use list::LocationList;
pub use location::Location;
pub use map::{LatLng, MapView};
pub use storage::LocationStore;

/// Result type alias for Spotfinder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Spotfinder operations
///
/// The non-storage variants are the user-facing validation and
/// "not found" conditions; their `Display` strings are shown verbatim
/// by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Search text is required")]
    EmptySearch,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("No location with id {0}")]
    IdNotFound(i64),

    #[error("Address not found: '{0}'")]
    AddressNotFound(String),

    #[error("Provide an id or an address to delete")]
    NothingToDelete,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the validation and not-found conditions that the CLI
    /// reports as a short message rather than a storage failure.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Error::Storage(_) | Error::Io(_))
    }
}
