//! List presentation adapter
//!
//! Exposes an ordered, fixed-size view over a slice of locations and
//! routes row activation to a caller-supplied callback with the exact
//! record for that row.

use crate::location::Location;

/// Ordered view of locations with a selection callback
pub struct LocationList<'a> {
    locations: &'a [Location],
    on_select: Box<dyn FnMut(&Location) + 'a>,
}

impl<'a> LocationList<'a> {
    pub fn new(locations: &'a [Location], on_select: impl FnMut(&Location) + 'a) -> Self {
        Self {
            locations,
            on_select: Box::new(on_select),
        }
    }

    /// Number of visible rows; always equals the underlying list length
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Text for one row: address plus formatted coordinates
    pub fn row(&self, index: usize) -> Option<String> {
        self.locations
            .get(index)
            .map(|loc| format!("{} ({})", loc.address, loc.coordinates()))
    }

    /// Activate a row, invoking the callback with its location.
    /// Returns false when the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        match self.locations.get(index) {
            Some(location) => {
                (self.on_select)(location);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new(1, "CN Tower, Toronto, ON", 43.6426, -79.3871),
            Location::new(2, "High Park, Toronto, ON", 43.6465, -79.4637),
        ]
    }

    #[test]
    fn test_len_matches_underlying_list() {
        let locations = sample_locations();
        let list = LocationList::new(&locations, |_| {});
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_row_shows_address_and_coordinates() {
        let locations = sample_locations();
        let list = LocationList::new(&locations, |_| {});
        assert_eq!(
            list.row(0).unwrap(),
            "CN Tower, Toronto, ON (43.6426, -79.3871)"
        );
        assert!(list.row(2).is_none());
    }

    #[test]
    fn test_select_invokes_callback_with_exact_record() {
        let locations = sample_locations();
        let mut selected = None;
        let mut list = LocationList::new(&locations, |loc| selected = Some(loc.clone()));

        assert!(list.select(1));
        drop(list);
        assert_eq!(selected.unwrap(), locations[1]);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let locations = sample_locations();
        let mut called = false;
        let mut list = LocationList::new(&locations, |_| called = true);

        assert!(!list.select(5));
        drop(list);
        assert!(!called);
    }
}
