//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::{schema, seed};
use crate::Result;
use crate::location::Location;

/// SQLite-backed storage for locations.
///
/// Owns the connection; construct one explicitly and pass it by
/// reference to whatever needs it. There is no implicit global handle.
pub struct LocationStore {
    conn: Connection,
}

impl LocationStore {
    /// Open a database file (creates and seeds if it doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        Self::initialize(&mut conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        Self::initialize(&mut conn)?;
        Ok(Self { conn })
    }

    /// Create the schema if absent, then seed the table if empty
    fn initialize(conn: &mut Connection) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        seed::seed_if_empty(conn)?;
        Ok(())
    }

    /// Insert a new location, returning its assigned id.
    ///
    /// No validation is performed here; callers are trusted to have
    /// checked their input.
    pub fn insert(&self, address: &str, latitude: f64, longitude: f64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO locations (address, latitude, longitude) VALUES (?1, ?2, ?3)",
            params![address, latitude, longitude],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update a location by id, returning the count of rows changed (0 or 1)
    pub fn update(&self, id: i64, address: &str, latitude: f64, longitude: f64) -> Result<usize> {
        let rows = self.conn.execute(
            "UPDATE locations SET address = ?1, latitude = ?2, longitude = ?3 WHERE id = ?4",
            params![address, latitude, longitude, id],
        )?;
        Ok(rows)
    }

    /// Delete a location by id, returning the count of rows changed (0 or 1)
    pub fn delete(&self, id: i64) -> Result<usize> {
        let rows = self
            .conn
            .execute("DELETE FROM locations WHERE id = ?1", [id])?;
        Ok(rows)
    }

    /// Get a location by id
    pub fn get(&self, id: i64) -> Result<Option<Location>> {
        self.conn
            .query_row(
                "SELECT id, address, latitude, longitude FROM locations WHERE id = ?1",
                [id],
                |row| self.row_to_location(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Find the first location whose address contains the query,
    /// case-insensitively. Lowest id wins when several match.
    pub fn find_by_address(&self, query: &str) -> Result<Option<Location>> {
        let pattern = format!("%{}%", query);
        self.conn
            .query_row(
                "SELECT id, address, latitude, longitude FROM locations
                 WHERE address LIKE ?1 COLLATE NOCASE
                 ORDER BY id ASC LIMIT 1",
                [pattern],
                |row| self.row_to_location(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// List every location, ordered by address ascending, case-insensitive
    pub fn list_all(&self) -> Result<Vec<Location>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, address, latitude, longitude FROM locations
             ORDER BY address COLLATE NOCASE ASC",
        )?;

        let locations = stmt
            .query_map([], |row| self.row_to_location(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(locations)
    }

    /// Count all locations
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM locations", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            locations: self.count()?,
            seed_rows: seed::SEED_LOCATIONS.len(),
        })
    }

    /// Explicitly close the store, flushing the connection
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    /// Helper to convert a row to a Location
    fn row_to_location(&self, row: &rusqlite::Row) -> rusqlite::Result<Location> {
        Ok(Location {
            id: row.get(0)?,
            address: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub locations: usize,
    pub seed_rows: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Statistics:")?;
        writeln!(f, "  Locations: {}", self.locations)?;
        write!(f, "  Seed rows: {}", self.seed_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_empty_table() {
        let store = LocationStore::open_in_memory().unwrap();
        assert_eq!(store.count().unwrap(), seed::SEED_LOCATIONS.len());
    }

    #[test]
    fn test_insert_returns_fresh_id() {
        let store = LocationStore::open_in_memory().unwrap();

        let a = store.insert("Test Plaza", 43.0, -79.0).unwrap();
        let b = store.insert("Other Plaza", 44.0, -78.0).unwrap();

        assert_ne!(a, b);
        let fetched = store.get(a).unwrap().unwrap();
        assert_eq!(fetched.address, "Test Plaza");
        assert_eq!(fetched.latitude, 43.0);
        assert_eq!(fetched.longitude, -79.0);
    }

    #[test]
    fn test_update_known_id_persists_values() {
        let store = LocationStore::open_in_memory().unwrap();

        let id = store.insert("Test Plaza", 43.0, -79.0).unwrap();
        let rows = store.update(id, "Renamed Plaza", 43.5, -79.5).unwrap();
        assert_eq!(rows, 1);

        let fetched = store.get(id).unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.address, "Renamed Plaza");
        assert_eq!(fetched.latitude, 43.5);
        assert_eq!(fetched.longitude, -79.5);
    }

    #[test]
    fn test_update_unknown_id_changes_nothing() {
        let store = LocationStore::open_in_memory().unwrap();
        let rows = store.update(999_999, "Nowhere", 0.0, 0.0).unwrap();
        assert_eq!(rows, 0);
    }

    #[test]
    fn test_delete_known_and_unknown_id() {
        let store = LocationStore::open_in_memory().unwrap();

        let id = store.insert("Test Plaza", 43.0, -79.0).unwrap();
        assert_eq!(store.delete(id).unwrap(), 1);
        assert_eq!(store.delete(id).unwrap(), 0);
        assert!(store.get(id).unwrap().is_none());
    }

    #[test]
    fn test_find_by_address_is_case_insensitive() {
        let store = LocationStore::open_in_memory().unwrap();

        let found = store.find_by_address("cn tower").unwrap().unwrap();
        assert_eq!(found.address, "CN Tower, Toronto, ON");
    }

    #[test]
    fn test_find_by_address_returns_lowest_id_match() {
        let store = LocationStore::open_in_memory().unwrap();

        let first = store.insert("Zebra Crossing North", 43.1, -79.1).unwrap();
        let _second = store.insert("Zebra Crossing South", 43.2, -79.2).unwrap();

        let found = store.find_by_address("zebra").unwrap().unwrap();
        assert_eq!(found.id, first);
    }

    #[test]
    fn test_find_by_address_miss_returns_none() {
        let store = LocationStore::open_in_memory().unwrap();
        assert!(store.find_by_address("no such place anywhere").unwrap().is_none());
    }

    #[test]
    fn test_list_all_sorted_by_address_case_insensitive() {
        let store = LocationStore::open_in_memory().unwrap();

        store.insert("zzz Last Stop", 43.0, -79.0).unwrap();
        store.insert("AAA First Stop", 43.0, -79.0).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), seed::SEED_LOCATIONS.len() + 2);
        assert_eq!(all.first().unwrap().address, "AAA First Stop");
        assert_eq!(all.last().unwrap().address, "zzz Last Stop");

        let lowered: Vec<String> = all.iter().map(|l| l.address.to_lowercase()).collect();
        let mut sorted = lowered.clone();
        sorted.sort();
        assert_eq!(lowered, sorted);
    }

    #[test]
    fn test_seed_runs_at_most_once() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("spotfinder.db");

        let store = LocationStore::open(&db_path).unwrap();
        let baseline = store.count().unwrap();
        let id = store.insert("Test Plaza", 43.0, -79.0).unwrap();
        store.close().unwrap();

        // Reopening must neither duplicate nor remove rows
        let store = LocationStore::open(&db_path).unwrap();
        assert_eq!(store.count().unwrap(), baseline + 1);
        assert!(store.get(id).unwrap().is_some());
    }

    #[test]
    fn test_insert_find_delete_scenario() {
        let store = LocationStore::open_in_memory().unwrap();

        let id = store.insert("Test Plaza", 43.0, -79.0).unwrap();

        let found = store.find_by_address("test").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.address, "Test Plaza");

        assert_eq!(store.delete(id).unwrap(), 1);
        assert!(store.find_by_address("test").unwrap().is_none());
    }

    #[test]
    fn test_stats_reports_row_count() {
        let store = LocationStore::open_in_memory().unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.locations, seed::SEED_LOCATIONS.len());
        assert_eq!(stats.seed_rows, seed::SEED_LOCATIONS.len());
    }
}
