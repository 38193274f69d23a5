//! Application shell
//!
//! Orchestrates user intents: validates raw text input, calls the
//! store, reloads the cached list after every mutation, and keeps the
//! map focused on the active record. All operations are synchronous;
//! failures are the validation and not-found conditions in
//! [`crate::Error`].

use crate::list::LocationList;
use crate::location::Location;
use crate::map::{self, LatLng, MapView};
use crate::storage::LocationStore;
use crate::{Error, Result};

/// The application shell: store + map + the transient cached copy of
/// the full table.
pub struct App<M: MapView> {
    store: LocationStore,
    map: M,
    locations: Vec<Location>,
    map_ready: bool,
}

impl<M: MapView> App<M> {
    /// Wire the shell to a store and a map view and load the list
    pub fn new(store: LocationStore, map: M) -> Result<Self> {
        let locations = store.list_all()?;
        Ok(Self {
            store,
            map,
            locations,
            map_ready: false,
        })
    }

    /// The map reports ready exactly once; position the initial
    /// regional camera. Subsequent calls are no-ops.
    pub fn on_map_ready(&mut self) {
        if self.map_ready {
            return;
        }
        self.map_ready = true;
        self.map.move_camera(map::REGION_CENTER, map::REGION_ZOOM);
    }

    /// Cached copy of the full table, ordered by address
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Find a location by address substring and focus the map on it
    pub fn search(&mut self, raw_query: &str) -> Result<Location> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Err(Error::EmptySearch);
        }

        match self.store.find_by_address(query)? {
            Some(location) => {
                self.focus_map(&location);
                Ok(location)
            }
            None => Err(Error::AddressNotFound(query.to_string())),
        }
    }

    /// Validate and insert a new location, then reload the list
    pub fn add(&mut self, address: &str, latitude: &str, longitude: &str) -> Result<i64> {
        let address = require_text("address", address)?;
        let latitude = parse_coordinate("latitude", latitude)?;
        let longitude = parse_coordinate("longitude", longitude)?;

        let id = self.store.insert(&address, latitude, longitude)?;
        tracing::info!("Inserted location {} ({})", id, address);
        self.reload()?;
        Ok(id)
    }

    /// Validate and update an existing location, then reload the list.
    /// Returns the record as persisted.
    pub fn update(
        &mut self,
        id: &str,
        address: &str,
        latitude: &str,
        longitude: &str,
    ) -> Result<Location> {
        let id = parse_id(id)?;
        let address = require_text("address", address)?;
        let latitude = parse_coordinate("latitude", latitude)?;
        let longitude = parse_coordinate("longitude", longitude)?;

        let rows = self.store.update(id, &address, latitude, longitude)?;
        if rows == 0 {
            return Err(Error::IdNotFound(id));
        }
        tracing::info!("Updated location {}", id);
        self.reload()?;

        Ok(Location::new(id, address, latitude, longitude))
    }

    /// Delete by id when supplied, otherwise by address substring
    /// (first match, lowest id). Returns the record that was deleted so
    /// a substring-resolved deletion is never silent.
    pub fn delete(&mut self, id: Option<&str>, address: Option<&str>) -> Result<Location> {
        let id = id.map(str::trim).filter(|s| !s.is_empty());
        let address = address.map(str::trim).filter(|s| !s.is_empty());

        let target = match (id, address) {
            (Some(raw), _) => {
                let id = parse_id(raw)?;
                self.store.get(id)?.ok_or(Error::IdNotFound(id))?
            }
            (None, Some(query)) => self
                .store
                .find_by_address(query)?
                .ok_or_else(|| Error::AddressNotFound(query.to_string()))?,
            (None, None) => return Err(Error::NothingToDelete),
        };

        let rows = self.store.delete(target.id)?;
        if rows == 0 {
            return Err(Error::IdNotFound(target.id));
        }
        tracing::info!("Deleted location {} ({})", target.id, target.address);
        self.reload()?;
        Ok(target)
    }

    /// Activate a list row, focusing the map on its location
    pub fn select(&mut self, row: usize) -> Option<Location> {
        let mut selected = None;
        {
            let mut list = LocationList::new(&self.locations, |loc| selected = Some(loc.clone()));
            if !list.select(row) {
                return None;
            }
        }
        let location = selected?;
        self.focus_map(&location);
        Some(location)
    }

    /// Clear markers, drop one titled marker, and animate the camera in
    fn focus_map(&mut self, location: &Location) {
        if !self.map_ready {
            return;
        }
        let target = LatLng::new(location.latitude, location.longitude);
        self.map.clear();
        self.map.add_marker(target, &location.address);
        self.map.animate_camera(target, map::FOCUS_ZOOM);
    }

    /// Refresh the cached list from the store; no partial invalidation
    fn reload(&mut self) -> Result<()> {
        self.locations = self.store.list_all()?;
        Ok(())
    }
}

fn require_text(field: &'static str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField(field));
    }
    trimmed.parse().map_err(|_| Error::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}

fn parse_id(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField("id"));
    }
    trimmed.parse().map_err(|_| Error::InvalidNumber {
        field: "id",
        value: trimmed.to_string(),
    })
}
