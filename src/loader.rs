//! Builds an [OccupancyGrid] and its points of interest from the three area
//! tables: `area_map.csv` (per-cell construction flags), `area_struct.csv`
//! (per-cell structure categories) and `area_category.csv` (category id to
//! display name). Map and structure rows are joined on `(x, y)`; category
//! names are joined on the category id. Headers and values may carry stray
//! whitespace, which is trimmed away.

use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::OccupancyGrid;
use csv::{ReaderBuilder, Trim};
use fxhash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Structure categories used in `area_struct.csv`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Structure {
    Apartment,
    Building,
    Home,
    Cafe,
}

impl Structure {
    /// Maps a category id to its structure kind. Id 0 (empty cell) and any
    /// unknown id map to [None] and are skipped; the tables leave room for
    /// categories without a structure.
    pub fn from_category(id: u32) -> Option<Structure> {
        match id {
            1 => Some(Structure::Apartment),
            2 => Some(Structure::Building),
            3 => Some(Structure::Home),
            4 => Some(Structure::Cafe),
            _ => None,
        }
    }
}

/// Errors produced while loading the area tables.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read input")]
    Io(#[from] std::io::Error),
    #[error("could not parse record")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("structure data contains no home cell (category 3)")]
    MissingHome,
}

/// The loaded area: the occupancy grid plus everything the pathfinder and
/// the reporter need to know about it.
#[derive(Clone, Debug)]
pub struct AreaMap {
    pub grid: OccupancyGrid,
    /// The unique start cell (category 3).
    pub home: Cell,
    /// Candidate goal cells (category 4) in table order, which is also the
    /// tie-break order for multi-goal searches.
    pub cafes: Vec<Cell>,
    pub apartments: Vec<Cell>,
    pub buildings: Vec<Cell>,
    /// Category id to display name, from `area_category.csv`.
    pub category_names: FxHashMap<u32, String>,
}

#[derive(Debug, Deserialize)]
struct MapRecord {
    x: i32,
    y: i32,
    #[serde(rename = "ConstructionSite")]
    construction_site: u8,
}

#[derive(Debug, Deserialize)]
struct StructRecord {
    x: i32,
    y: i32,
    category: u32,
    #[allow(unused)]
    area: u32,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    category: u32,
    #[serde(rename = "struct")]
    name: String,
}

fn read_records<T: DeserializeOwned>(input: impl Read) -> Result<Vec<T>, LoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Loads an area from the three tables as readers.
pub fn load_area(
    map_csv: impl Read,
    struct_csv: impl Read,
    category_csv: impl Read,
) -> Result<AreaMap, LoadError> {
    let map_records: Vec<MapRecord> = read_records(map_csv)?;
    let struct_records: Vec<StructRecord> = read_records(struct_csv)?;
    let category_records: Vec<CategoryRecord> = read_records(category_csv)?;

    let category_names: FxHashMap<u32, String> = category_records
        .into_iter()
        .map(|r| (r.category, r.name))
        .collect();

    // Grid bounds are the largest coordinates observed in either table.
    let max_x = map_records
        .iter()
        .map(|r| r.x)
        .chain(struct_records.iter().map(|r| r.x))
        .max()
        .unwrap_or(0);
    let max_y = map_records
        .iter()
        .map(|r| r.y)
        .chain(struct_records.iter().map(|r| r.y))
        .max()
        .unwrap_or(0);

    let blocked = map_records
        .iter()
        .filter(|r| r.construction_site == 1)
        .map(|r| Cell::new(r.x, r.y));
    let grid = OccupancyGrid::new(max_x, max_y, blocked)?;

    let mut home = None;
    let mut cafes = Vec::new();
    let mut apartments = Vec::new();
    let mut buildings = Vec::new();
    for record in &struct_records {
        let cell = Cell::new(record.x, record.y);
        match Structure::from_category(record.category) {
            Some(Structure::Home) => {
                // The home cell is unique; a duplicate row keeps the first.
                home.get_or_insert(cell);
            }
            Some(Structure::Cafe) => cafes.push(cell),
            Some(Structure::Apartment) => apartments.push(cell),
            Some(Structure::Building) => buildings.push(cell),
            None => {}
        }
    }

    Ok(AreaMap {
        grid,
        home: home.ok_or(LoadError::MissingHome)?,
        cafes,
        apartments,
        buildings,
        category_names,
    })
}

/// Loads an area from `area_map.csv`, `area_struct.csv` and
/// `area_category.csv` inside `dir`.
pub fn load_area_dir(dir: impl AsRef<Path>) -> Result<AreaMap, LoadError> {
    let dir = dir.as_ref();
    let open = |name: &str| File::open(dir.join(name));
    load_area(
        open("area_map.csv")?,
        open("area_struct.csv")?,
        open("area_category.csv")?,
    )
}
