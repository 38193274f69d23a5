use tabled::{Table, Tabled, settings::Style};

use crate::location::Location;

#[derive(Tabled)]
pub struct LocationRow {
    #[tabled(rename = "Id")]
    pub id: i64,
    #[tabled(rename = "Address")]
    pub address: String,
    #[tabled(rename = "Coordinates")]
    pub coordinates: String,
}

impl From<&Location> for LocationRow {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id,
            address: location.address.clone(),
            coordinates: location.coordinates(),
        }
    }
}

/// Render the location list as a terminal table
pub fn locations_table(locations: &[Location]) -> String {
    if locations.is_empty() {
        return String::new();
    }

    let rows: Vec<LocationRow> = locations.iter().map(Into::into).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
