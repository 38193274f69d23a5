//! Spotfinder CLI - browse, search, and edit saved map locations

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spotfinder::app::App;
use spotfinder::config;
use spotfinder::map::ConsoleMap;
use spotfinder::storage::LocationStore;
use spotfinder::ui;

#[derive(Parser)]
#[command(name = "spotfinder")]
#[command(version)]
#[command(about = "Saved-places manager - SQLite-backed location book with a map preview")]
#[command(long_about = r#"
Spotfinder keeps a local book of named map locations, enabling:
  • Case-insensitive substring search over addresses
  • Add / update / delete by id or by address
  • A sorted listing with coordinates and a map focus per record

Example usage:
  spotfinder list
  spotfinder find --query "cn tower"
  spotfinder add --address "Test Plaza" --lat 43.0 --lng -79.0
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (defaults from spotfinder.toml, then spotfinder.db)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a spotfinder.toml config and create + seed the database
    Init {
        /// Path for the config file
        #[arg(short, long, default_value = "spotfinder.toml")]
        config: PathBuf,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List every saved location, ordered by address
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Find the first location whose address contains the query
    Find {
        /// Search text (case-insensitive substring)
        #[arg(short, long)]
        query: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Add a new location
    Add {
        /// Address of the place
        #[arg(short, long)]
        address: String,

        /// Latitude
        #[arg(long)]
        lat: String,

        /// Longitude
        #[arg(long)]
        lng: String,
    },

    /// Update an existing location by id
    Update {
        /// Location id
        #[arg(short, long)]
        id: String,

        /// New address
        #[arg(short, long)]
        address: String,

        /// New latitude
        #[arg(long)]
        lat: String,

        /// New longitude
        #[arg(long)]
        lng: String,
    },

    /// Delete a location by id, or by address substring when no id is given
    Delete {
        /// Location id
        #[arg(short, long)]
        id: Option<String>,

        /// Address substring to resolve (first match, lowest id)
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Show one list row on the map (rows are zero-based, address order)
    Show {
        /// Row index in the listing
        #[arg(short, long)]
        row: usize,
    },

    /// Show statistics about the location book
    Stats {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let database = resolve_database(cli.database)?;

    if let Commands::Init { config, force } = &cli.command {
        return run_init(config, &database, *force);
    }

    config::ensure_db_dir(&database)?;
    let store = LocationStore::open(&database)?;
    let mut app = App::new(store, ConsoleMap::new())?;
    app.on_map_ready();

    let result = match cli.command {
        Commands::Init { .. } => unreachable!("handled above"),

        Commands::List { format } => run_list(&app, &format),

        Commands::Find { query, format } => app.search(&query).map(|found| {
            if format == "json" {
                match serde_json::to_string_pretty(&found) {
                    Ok(json) => println!("{}", json),
                    Err(e) => tracing::error!("Failed to serialize location: {}", e),
                }
            } else {
                ui::success(&format!("Found: {}", found));
            }
        }),

        Commands::Add { address, lat, lng } => app.add(&address, &lat, &lng).map(|id| {
            ui::success(&format!("Added location {} ({})", id, address.trim()));
        }),

        Commands::Update {
            id,
            address,
            lat,
            lng,
        } => app.update(&id, &address, &lat, &lng).map(|updated| {
            ui::success(&format!("Updated: {}", updated));
        }),

        Commands::Delete { id, address } => app
            .delete(id.as_deref(), address.as_deref())
            .map(|deleted| {
                ui::success(&format!("Deleted: {}", deleted));
            }),

        Commands::Show { row } => match app.select(row) {
            Some(selected) => {
                ui::info("Selected", &selected.to_string());
                Ok(())
            }
            None => {
                ui::error(&format!("No row {} in the listing", row));
                std::process::exit(1);
            }
        },

        Commands::Stats { format } => run_stats(&app, &database, &format),
    };

    // Validation and not-found conditions are short user-facing
    // messages, not process failures worth a backtrace.
    if let Err(e) = result {
        if e.is_user_facing() {
            ui::error(&e.to_string());
            std::process::exit(1);
        }
        return Err(e.into());
    }

    Ok(())
}

/// CLI flag wins, then the config file, then spotfinder.db
fn resolve_database(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Some(cfg) = config::load_config(None)? {
        if let Some(database) = cfg.database {
            return Ok(PathBuf::from(database));
        }
    }
    Ok(config::default_database_path())
}

fn run_init(config_path: &Path, database: &Path, force: bool) -> anyhow::Result<()> {
    let cfg = config::SpotfinderConfig {
        database: Some(database.display().to_string()),
    };
    config::write_config(config_path, &cfg, force)?;
    ui::status(
        ui::Icons::WRENCH,
        "Config",
        &config_path.display().to_string(),
    );

    config::ensure_db_dir(database)?;
    let store = LocationStore::open(database)?;
    let count = store.count()?;
    store.close()?;

    ui::status(ui::Icons::DATABASE, "Database", &database.display().to_string());
    ui::success(&format!("Ready with {} locations", count));
    Ok(())
}

fn run_list(app: &App<ConsoleMap>, format: &str) -> spotfinder::Result<()> {
    let locations = app.locations();

    if format == "json" {
        match serde_json::to_string_pretty(locations) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize locations: {}", e),
        }
        return Ok(());
    }

    if locations.is_empty() {
        ui::warn("No locations saved yet.");
        return Ok(());
    }

    ui::header(&format!("{} locations", locations.len()));
    println!("{}", ui::locations_table(locations));
    Ok(())
}

fn run_stats(app: &App<ConsoleMap>, database: &Path, format: &str) -> spotfinder::Result<()> {
    let stats = app.store().stats()?;

    if format == "json" {
        let data = serde_json::json!({
            "database": database.display().to_string(),
            "locations": stats.locations,
            "seed_rows": stats.seed_rows,
        });
        println!("{}", data);
        return Ok(());
    }

    ui::section("Spotfinder Statistics");
    let mut table = ui::TableBuilder::new();
    table.add_row("Database", &database.display().to_string());
    table.add_row("Locations", &stats.locations.to_string());
    table.add_row("Seed rows", &stats.seed_rows.to_string());
    println!("{}", table.build());
    Ok(())
}
