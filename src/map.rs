//! Map view abstraction
//!
//! The shell talks to the map through the `MapView` trait: position the
//! camera, clear markers, drop a titled marker. `ConsoleMap` is the
//! terminal implementation; tests substitute a recording double.

use crate::ui;

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Initial camera target: central Greater Toronto Area
pub const REGION_CENTER: LatLng = LatLng {
    latitude: 43.7250,
    longitude: -79.3400,
};

/// Zoom level for the initial regional view
pub const REGION_ZOOM: f32 = 9.0;

/// Zoom level when focusing on a single location
pub const FOCUS_ZOOM: f32 = 14.0;

/// Camera and marker control for an interactive map widget
pub trait MapView {
    /// Jump the camera to a target without animation
    fn move_camera(&mut self, target: LatLng, zoom: f32);

    /// Animate the camera to a target
    fn animate_camera(&mut self, target: LatLng, zoom: f32);

    /// Remove all markers
    fn clear(&mut self);

    /// Place a titled marker at a position
    fn add_marker(&mut self, position: LatLng, title: &str);
}

/// Map view that renders camera moves and markers to the terminal.
///
/// Prints on stderr: marker and camera lines are decoration and must
/// not interleave with machine-readable stdout (`--format json`).
#[derive(Debug, Default)]
pub struct ConsoleMap;

impl ConsoleMap {
    pub fn new() -> Self {
        Self
    }
}

impl MapView for ConsoleMap {
    fn move_camera(&mut self, target: LatLng, zoom: f32) {
        tracing::debug!("Camera moved to {} (zoom {})", target, zoom);
    }

    fn animate_camera(&mut self, target: LatLng, zoom: f32) {
        ui::status_err(
            ui::Icons::GLOBE,
            "Map",
            &format!("{} (zoom {})", target, zoom),
        );
    }

    fn clear(&mut self) {}

    fn add_marker(&mut self, position: LatLng, title: &str) {
        ui::status_err(ui::Icons::PIN, title, &position.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_display() {
        let gta = LatLng::new(43.7250, -79.3400);
        assert_eq!(gta.to_string(), "43.7250, -79.3400");
    }

    #[test]
    fn test_region_constants() {
        assert_eq!(REGION_CENTER.latitude, 43.7250);
        assert_eq!(REGION_CENTER.longitude, -79.3400);
        assert_eq!(REGION_ZOOM, 9.0);
        assert_eq!(FOCUS_ZOOM, 14.0);
    }
}
